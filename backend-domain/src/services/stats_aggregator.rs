//! All-time daily averages per category.
//!
//! Rates are global: counts divided by the whole days elapsed since the first
//! recorded event, never a rolling window.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::entities::{AllTimeAverages, Event, StatsSnapshot, ToothbrushEvent};
use crate::utils::{round_to_tenth, whole_days_between};
use crate::value_objects::EventCategory;

pub fn compute_stats(
    events: &[Event],
    toothbrush: &[ToothbrushEvent],
    now: DateTime<Utc>,
) -> StatsSnapshot {
    let first_event_date = events.iter().map(|event| event.timestamp).min();
    let first_toothbrush_date = toothbrush.iter().map(|event| event.timestamp).min();

    // at least one day of observation, even for same-day data
    let total_days = first_event_date
        .map(|first| whole_days_between(first, now))
        .unwrap_or(0)
        .max(1);

    let mut counts: HashMap<EventCategory, usize> = HashMap::new();
    for event in events {
        *counts.entry(event.event_type).or_default() += 1;
    }
    let rate = |count: usize| round_to_tenth(count as f64 / total_days as f64);
    let category_rate = |category: EventCategory| rate(counts.get(&category).copied().unwrap_or(0));

    StatsSnapshot {
        first_event_date,
        first_toothbrush_date,
        all_time_averages: AllTimeAverages {
            pee: category_rate(EventCategory::Pee),
            poo: category_rate(EventCategory::Poo),
            cum: category_rate(EventCategory::Cum),
            toothbrush: rate(toothbrush.len()),
        },
        total_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::LocationCategory;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 18, 0, 0).unwrap()
    }

    fn event(id: i64, event_type: EventCategory, timestamp: DateTime<Utc>) -> Event {
        Event {
            id,
            event_type,
            location: LocationCategory::Home,
            who: None,
            timestamp,
        }
    }

    fn brush(id: i64, timestamp: DateTime<Utc>) -> ToothbrushEvent {
        ToothbrushEvent {
            id,
            timestamp,
            used_irrigator: false,
        }
    }

    #[test]
    fn empty_collections_yield_default_snapshot() {
        let stats = compute_stats(&[], &[], now());
        assert_eq!(stats, StatsSnapshot::default());
        assert_eq!(stats.total_days, 1);
        assert_eq!(stats.all_time_averages.pee, 0.0);
        assert_eq!(stats.all_time_averages.toothbrush, 0.0);
    }

    #[test]
    fn rates_over_two_days() {
        let first = now() - Duration::days(2);
        let events = vec![
            event(1, EventCategory::Pee, first),
            event(2, EventCategory::Pee, first + Duration::hours(5)),
            event(3, EventCategory::Pee, now() - Duration::hours(1)),
            event(4, EventCategory::Poo, now() - Duration::hours(2)),
        ];
        let stats = compute_stats(&events, &[], now());
        assert_eq!(stats.total_days, 2);
        assert_eq!(stats.first_event_date, Some(first));
        assert_eq!(stats.all_time_averages.pee, 1.5);
        assert_eq!(stats.all_time_averages.poo, 0.5);
        assert_eq!(stats.all_time_averages.cum, 0.0);
    }

    #[test]
    fn same_day_data_counts_as_one_day() {
        let events = vec![
            event(1, EventCategory::Cum, now() - Duration::hours(3)),
            event(2, EventCategory::Cum, now() - Duration::hours(1)),
        ];
        let stats = compute_stats(&events, &[], now());
        assert_eq!(stats.total_days, 1);
        assert_eq!(stats.all_time_averages.cum, 2.0);
    }

    #[test]
    fn partial_days_are_floored() {
        let events = vec![event(1, EventCategory::Pee, now() - Duration::hours(71))];
        let stats = compute_stats(&events, &[], now());
        assert_eq!(stats.total_days, 2);
    }

    #[test]
    fn future_first_event_still_counts_one_day() {
        let events = vec![event(1, EventCategory::Pee, now() + Duration::days(3))];
        assert_eq!(compute_stats(&events, &[], now()).total_days, 1);
    }

    #[test]
    fn toothbrush_rate_uses_event_days() {
        let events = vec![event(1, EventCategory::Pee, now() - Duration::days(3))];
        let first_brush = now() - Duration::days(10);
        let brushes = vec![
            brush(1, first_brush),
            brush(2, now() - Duration::days(1)),
            brush(3, now()),
            brush(4, now()),
        ];
        let stats = compute_stats(&events, &brushes, now());
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.first_toothbrush_date, Some(first_brush));
        assert_eq!(stats.all_time_averages.toothbrush, 1.3);
    }

    #[test]
    fn toothbrush_only_divides_by_one_day() {
        let brushes = vec![brush(1, now() - Duration::days(4)), brush(2, now())];
        let stats = compute_stats(&[], &brushes, now());
        assert_eq!(stats.first_event_date, None);
        assert_eq!(stats.total_days, 1);
        assert_eq!(stats.all_time_averages.toothbrush, 2.0);
    }

    #[test]
    fn snapshot_serializes_null_dates() {
        let json = serde_json::to_value(compute_stats(&[], &[], now())).unwrap();
        assert!(json["first_event_date"].is_null());
        assert!(json["first_toothbrush_date"].is_null());
        assert_eq!(json["total_days"], 1);
        assert_eq!(json["all_time_averages"]["toothbrush"], 0.0);
    }
}
