//! Queries over the `profiles` collection.

use crate::data::rest::{Order, Query};

pub fn all_query(limit: u32) -> Query {
    Query::from("profiles")
        .select("id, username, avatar_url")
        .order("username", Order::Asc)
        .limit(limit)
}

pub fn by_id_query(user_id: &str) -> Query {
    Query::from("profiles")
        .select("id, username, avatar_url")
        .eq("id", user_id)
}

#[cfg(feature = "web")]
pub use web::{create, fetch_all, fetch_by_id, update};

#[cfg(feature = "web")]
mod web {
    use serde_json::json;

    use crate::data::rest::{self, OnConflict, Query};
    use crate::data::{auth::Session, Config, DataError};
    use crate::model::Profile;

    pub async fn fetch_all(
        config: &Config,
        session: Option<&Session>,
        limit: u32,
    ) -> Result<Vec<Profile>, DataError> {
        rest::fetch_rows(config, session, &super::all_query(limit)).await
    }

    pub async fn fetch_by_id(
        config: &Config,
        session: Option<&Session>,
        user_id: &str,
    ) -> Result<Option<Profile>, DataError> {
        rest::fetch_one(config, session, &super::by_id_query(user_id)).await
    }

    /// Creates the profile row matching a freshly signed-up identity.
    pub async fn create(
        config: &Config,
        session: &Session,
        username: &str,
    ) -> Result<(), DataError> {
        let row = json!({ "id": session.user.id, "username": username });
        rest::insert_row(config, session, "profiles", &row, OnConflict::Ignore).await
    }

    /// Updates username and/or avatar on the caller's own profile row.
    pub async fn update(
        config: &Config,
        session: &Session,
        username: &str,
        avatar_url: Option<&str>,
    ) -> Result<(), DataError> {
        let patch = match avatar_url {
            Some(url) => json!({ "username": username, "avatar_url": url }),
            None => json!({ "username": username }),
        };

        let query = Query::from("profiles").eq("id", &session.user.id);
        rest::update_rows(config, session, &query, &patch).await
    }
}
