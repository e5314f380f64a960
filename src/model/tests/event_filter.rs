//! Tests for [`EventFilter`].

use crate::model::tests::event;
use crate::model::{EventFilter, EventType};

/// Tests that the text predicate matches titles case-insensitively.
#[test]
fn text_filter_is_case_insensitive() {
    let events = vec![
        event(1, "Sunday Morning Meet", EventType::Meet, 1),
        event(2, "Night Cruise", EventType::Cruise, 2),
    ];

    let filter = EventFilter {
        text: "MORNING".to_string(),
        event_type: None,
    };
    let matched = filter.apply(&events);

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, 1);
}

/// Tests that the category predicate alone narrows by event type.
#[test]
fn category_filter_narrows_by_type() {
    let events = vec![
        event(1, "Sunday Morning Meet", EventType::Meet, 1),
        event(2, "Night Cruise", EventType::Cruise, 2),
        event(3, "Harbor Cruise", EventType::Cruise, 3),
    ];

    let filter = EventFilter {
        text: String::new(),
        event_type: Some(EventType::Cruise),
    };

    assert_eq!(filter.apply(&events).len(), 2);
}

/// Tests that text and category predicates combine conjunctively.
#[test]
fn combined_filters_require_both_predicates() {
    let events = vec![
        event(1, "Sunday Morning Meet", EventType::Meet, 1),
        event(2, "Night Cruise", EventType::Cruise, 2),
        event(3, "Morning Cruise", EventType::Cruise, 3),
    ];

    let filter = EventFilter {
        text: "morning".to_string(),
        event_type: Some(EventType::Cruise),
    };
    let matched = filter.apply(&events);

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, 3);
}

/// Tests that an empty filter keeps every event in fetch order.
///
/// The backend returns upcoming events sorted ascending by start time, and
/// filtering must preserve that order.
#[test]
fn empty_filter_preserves_fetch_order() {
    let events = vec![
        event(1, "First", EventType::Meet, 1),
        event(2, "Second", EventType::Show, 5),
        event(3, "Third", EventType::Other, 9),
    ];

    let matched = EventFilter::default().apply(&events);

    assert_eq!(matched, events);
    assert!(matched.windows(2).all(|w| w[0].starts_at <= w[1].starts_at));
}
