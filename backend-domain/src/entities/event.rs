// Event entity
// A categorical, timestamped occurrence with a type and a location

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EventCategory, LocationCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub event_type: EventCategory,
    pub location: LocationCategory,
    pub who: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// An event that has not been assigned an id by the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub event_type: EventCategory,
    pub location: LocationCategory,
    pub who: Option<String>,
    pub timestamp: DateTime<Utc>,
}
