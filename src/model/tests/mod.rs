//! Tests for in-memory filtering over fetched event sets.

mod event_filter;

use chrono::{Duration, TimeZone, Utc};

use crate::model::{Event, EventType};

/// A fixture event starting `hours` after a fixed reference time.
pub fn event(id: i64, title: &str, event_type: EventType, hours: i64) -> Event {
    let reference = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

    Event {
        id,
        title: title.to_string(),
        event_type,
        starts_at: reference + Duration::hours(hours),
        latitude: 50.33,
        longitude: 6.94,
        address: None,
        description: None,
        owner_id: "owner-1".to_string(),
        owner: None,
    }
}
