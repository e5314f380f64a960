//! Queries over the `events` collection.

use chrono::{DateTime, Utc};

use crate::data::rest::{Order, Query};

/// Column selection embedding the owner profile join.
pub const EVENT_COLUMNS: &str = "*, owner:profiles(id, username, avatar_url)";

/// Upcoming events: start time at or after `now`, soonest first.
pub fn upcoming_query(now: DateTime<Utc>, limit: u32) -> Query {
    Query::from("events")
        .select(EVENT_COLUMNS)
        .gte("starts_at", now.to_rfc3339())
        .order("starts_at", Order::Asc)
        .limit(limit)
}

pub fn by_id_query(event_id: i64) -> Query {
    Query::from("events").select(EVENT_COLUMNS).eq("id", event_id)
}

pub fn by_owner_query(owner_id: &str) -> Query {
    Query::from("events")
        .select(EVENT_COLUMNS)
        .eq("owner_id", owner_id)
        .order("starts_at", Order::Asc)
}

/// Events by id list, used to resolve a user's favorites into full rows.
pub fn by_ids_query(event_ids: &[i64]) -> Query {
    Query::from("events")
        .select(EVENT_COLUMNS)
        .in_list("id", event_ids)
        .order("starts_at", Order::Asc)
}

#[cfg(feature = "web")]
pub use web::{create, delete, fetch_by_id, fetch_by_ids, fetch_by_owner, fetch_upcoming};

#[cfg(feature = "web")]
mod web {
    use chrono::Utc;

    use crate::data::rest::{self, OnConflict, Query};
    use crate::data::{auth::Session, Config, DataError};
    use crate::model::event::NewEvent;
    use crate::model::Event;

    pub async fn fetch_upcoming(
        config: &Config,
        session: Option<&Session>,
        limit: u32,
    ) -> Result<Vec<Event>, DataError> {
        let query = super::upcoming_query(Utc::now(), limit);
        rest::fetch_rows(config, session, &query).await
    }

    pub async fn fetch_by_id(
        config: &Config,
        session: Option<&Session>,
        event_id: i64,
    ) -> Result<Option<Event>, DataError> {
        rest::fetch_one(config, session, &super::by_id_query(event_id)).await
    }

    pub async fn fetch_by_owner(
        config: &Config,
        session: Option<&Session>,
        owner_id: &str,
    ) -> Result<Vec<Event>, DataError> {
        rest::fetch_rows(config, session, &super::by_owner_query(owner_id)).await
    }

    pub async fn fetch_by_ids(
        config: &Config,
        session: Option<&Session>,
        event_ids: &[i64],
    ) -> Result<Vec<Event>, DataError> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }
        rest::fetch_rows(config, session, &super::by_ids_query(event_ids)).await
    }

    pub async fn create(
        config: &Config,
        session: &Session,
        event: &NewEvent,
    ) -> Result<(), DataError> {
        rest::insert_row(config, session, "events", event, OnConflict::Error).await
    }

    pub async fn delete(
        config: &Config,
        session: &Session,
        event_id: i64,
    ) -> Result<(), DataError> {
        let query = Query::from("events").eq("id", event_id);
        rest::delete_rows(config, session, &query).await
    }
}
