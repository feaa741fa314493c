// Event category value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Pee,
    Poo,
    Cum,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Pee => "pee",
            EventCategory::Poo => "poo",
            EventCategory::Cum => "cum",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse used for API submissions and for rows read back from the
/// store. Free-form text from imports goes through the classifier instead.
impl FromStr for EventCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pee" => Ok(EventCategory::Pee),
            "poo" => Ok(EventCategory::Poo),
            "cum" => Ok(EventCategory::Cum),
            _ => Err(DomainError::UnknownCategory {
                field: "event_type",
                value: s.to_string(),
            }),
        }
    }
}
