use serde::{Deserialize, Serialize};

use backend_domain::{Event, ToothbrushEvent};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub event_type: String,
    pub location: String,
    #[serde(default)]
    pub who: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateToothbrushRequest {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub used_irrigator: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn new(status: &'static str) -> Self {
        Self { status }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    pub status: &'static str,
    pub rows_processed: usize,
}

impl ImportResponse {
    pub fn imported(rows_processed: usize) -> Self {
        Self {
            status: "imported",
            rows_processed,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DataSnapshot {
    pub events: Vec<Event>,
    pub toothbrush: Vec<ToothbrushEvent>,
}
