use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Profile;

/// Category of a car meet event, stored lowercase in the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meet,
    Cruise,
    TrackDay,
    Show,
    Other,
}

impl EventType {
    /// All categories, in the order the filter dropdown lists them.
    pub const ALL: [EventType; 5] = [
        EventType::Meet,
        EventType::Cruise,
        EventType::TrackDay,
        EventType::Show,
        EventType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Meet => "Meet",
            EventType::Cruise => "Cruise",
            EventType::TrackDay => "Track Day",
            EventType::Show => "Show",
            EventType::Other => "Other",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Meet => "meet",
            EventType::Cruise => "cruise",
            EventType::TrackDay => "trackday",
            EventType::Show => "show",
            EventType::Other => "other",
        }
    }

    pub fn from_str(value: &str) -> Option<EventType> {
        EventType::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

/// A scheduled car meet event, pinned to a coordinate pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub event_type: EventType,
    pub starts_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub description: Option<String>,
    pub owner_id: String,
    /// Embedded owner profile, present only when the query selects the join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Profile>,
}

/// Fields accepted by the backend when creating or updating an event.
#[derive(Clone, Debug, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub event_type: EventType,
    pub starts_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub description: Option<String>,
    pub owner_id: String,
}

/// In-memory filter applied over an already-fetched event set.
///
/// Both predicates must hold: the title must contain the text
/// case-insensitively, and the category must match when one is selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilter {
    pub text: String,
    pub event_type: Option<EventType>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        let text_ok = self.text.is_empty()
            || event.title.to_lowercase().contains(&self.text.to_lowercase());
        let type_ok = self.event_type.is_none_or(|t| event.event_type == t);

        text_ok && type_ok
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
