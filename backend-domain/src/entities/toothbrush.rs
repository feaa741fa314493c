// Toothbrush entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToothbrushEvent {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub used_irrigator: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewToothbrushEvent {
    pub timestamp: DateTime<Utc>,
    pub used_irrigator: bool,
}
