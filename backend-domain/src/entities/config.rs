// Runtime configuration handed to the layers that need it

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// A full connection URL. When set it takes precedence over the
    /// discrete host/port/user/password/name fields.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub connect_retries: u32,
    pub connect_retry_delay_ms: u64,
}
