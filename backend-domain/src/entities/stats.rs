// Aggregate statistics entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllTimeAverages {
    pub pee: f64,
    pub poo: f64,
    pub cum: f64,
    pub toothbrush: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub first_event_date: Option<DateTime<Utc>>,
    pub first_toothbrush_date: Option<DateTime<Utc>>,
    pub all_time_averages: AllTimeAverages,
    pub total_days: i64,
}

/// Null dates, zero averages and a single day of observation. This is also
/// what the stats endpoint serves when the store cannot be read.
impl Default for StatsSnapshot {
    fn default() -> Self {
        Self {
            first_event_date: None,
            first_toothbrush_date: None,
            all_time_averages: AllTimeAverages::default(),
            total_days: 1,
        }
    }
}
