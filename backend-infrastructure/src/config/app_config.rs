use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{DbConfig, RuntimeConfig};

use crate::config::validation::validate_database_url;

pub const CONFIG_PATH_ENV: &str = "LIFELOG_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: Option<String>,
    pub db_name: String,
    pub db_connect_retries: u32,
    pub db_connect_retry_delay_ms: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            database_url: None,
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_user: "postgres".to_string(),
            db_password: None,
            db_name: "lifelog".to_string(),
            db_connect_retries: 3,
            db_connect_retry_delay_ms: 1000,
            max_body_bytes: 16 * 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Loads from `path`, or from `LIFELOG_CONFIG` / `./config.toml` when no
    /// path is given. A missing file means defaults plus environment.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let file_path = match path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(
                env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
            ),
        };
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(&file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config file: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(url) = &self.database_url {
            if url.trim().is_empty() {
                self.database_url = None;
            }
        }
        if let Some(password) = &self.db_password {
            if password.is_empty() {
                self.db_password = None;
            }
        }
        self.db_host = self.db_host.trim().to_string();
        self.db_name = self.db_name.trim().to_string();
        self.bind_addr = self.bind_addr.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        match &self.database_url {
            Some(url) => validate_database_url(url)?,
            None => {
                if self.db_host.is_empty() {
                    return Err(anyhow!("db_host must not be empty"));
                }
                if self.db_port == 0 {
                    return Err(anyhow!("db_port must be greater than 0"));
                }
                if self.db_name.is_empty() {
                    return Err(anyhow!("db_name must not be empty"));
                }
            }
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            database_url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            name: self.db_name.clone(),
            connect_retries: self.db_connect_retries,
            connect_retry_delay_ms: self.db_connect_retry_delay_ms,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Environment names follow the usual deployment conventions: the
    /// connection settings are unprefixed, service settings use `LIFELOG_`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("LIFELOG_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("DATABASE_URL") {
            self.database_url = Some(value);
        }
        if let Some(value) = lookup("DB_HOST") {
            self.db_host = value;
        }
        if let Some(value) = lookup("DB_PORT") {
            self.db_port = value.parse().unwrap_or(self.db_port);
        }
        if let Some(value) = lookup("DB_USER") {
            self.db_user = value;
        }
        if let Some(value) = lookup("DB_PASSWORD") {
            self.db_password = Some(value);
        }
        if let Some(value) = lookup("DB_NAME") {
            self.db_name = value;
        }
        if let Some(value) = lookup("LIFELOG_DB_CONNECT_RETRIES") {
            self.db_connect_retries = value.parse().unwrap_or(self.db_connect_retries);
        }
        if let Some(value) = lookup("LIFELOG_DB_CONNECT_RETRY_DELAY_MS") {
            self.db_connect_retry_delay_ms =
                value.parse().unwrap_or(self.db_connect_retry_delay_ms);
        }
        if let Some(value) = lookup("LIFELOG_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("LIFELOG_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}
