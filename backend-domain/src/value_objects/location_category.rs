// Location category value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Home,
    Work,
    Other,
}

impl LocationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCategory::Home => "home",
            LocationCategory::Work => "work",
            LocationCategory::Other => "other",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(LocationCategory::Home),
            "work" => Ok(LocationCategory::Work),
            "other" => Ok(LocationCategory::Other),
            _ => Err(DomainError::UnknownCategory {
                field: "location",
                value: s.to_string(),
            }),
        }
    }
}
