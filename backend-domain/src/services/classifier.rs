//! Free-text to category classification.
//!
//! Each rule table is evaluated top to bottom and the first rule with a
//! matching pattern wins. Matching is a case-insensitive substring test.

use crate::value_objects::{EventCategory, LocationCategory};

type Rule<C> = (&'static [&'static str], C);

const EVENT_TYPE_RULES: &[Rule<EventCategory>] = &[
    (&["pee", "urinate"], EventCategory::Pee),
    (&["poo", "defecate", "bowel"], EventCategory::Poo),
    (&["cum", "ejaculate"], EventCategory::Cum),
];

/// Unmatched and empty event types land here. Kept for compatibility with
/// data imported before the category set was closed.
pub const DEFAULT_EVENT_CATEGORY: EventCategory = EventCategory::Pee;

const LOCATION_RULES: &[Rule<LocationCategory>] = &[
    (&["home"], LocationCategory::Home),
    (&["work"], LocationCategory::Work),
];

pub const DEFAULT_LOCATION: LocationCategory = LocationCategory::Home;
pub const UNMATCHED_LOCATION: LocationCategory = LocationCategory::Other;

fn first_match<C: Copy>(rules: &[Rule<C>], text: &str) -> Option<C> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|pattern| lowered.contains(pattern)))
        .map(|(_, category)| *category)
}

pub fn classify_event_type(text: &str) -> EventCategory {
    first_match(EVENT_TYPE_RULES, text).unwrap_or(DEFAULT_EVENT_CATEGORY)
}

pub fn classify_location(text: &str) -> LocationCategory {
    if text.trim().is_empty() {
        return DEFAULT_LOCATION;
    }
    first_match(LOCATION_RULES, text).unwrap_or(UNMATCHED_LOCATION)
}
