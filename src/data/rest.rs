//! Declarative query construction for the PostgREST-style data endpoint.
//!
//! [`Query`] renders a collection name, column selection (including embedded
//! relational joins), filter predicates, ordering, and a row limit into the
//! endpoint's URL grammar. Construction is pure so the URL shape can be
//! verified without a network; execution lives behind the `web` feature and
//! goes through `reqwasm`.

use std::fmt::Display;

use crate::data::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn suffix(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Conflict handling for inserts into join collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnConflict {
    /// Duplicate rows are a backend error.
    Error,
    /// Duplicate rows are silently ignored, making the insert idempotent.
    Ignore,
}

/// A read/mutation target: one collection plus rendered query parameters.
///
/// Filter values are percent-encoded at build time; the column selection is
/// passed through untouched since the join grammar relies on commas, colons,
/// and parentheses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    collection: String,
    select: Option<String>,
    filters: Vec<String>,
    order: Option<String>,
    limit: Option<u32>,
}

impl Query {
    pub fn from(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Column list, e.g. `"*, owner:profiles(id, username, avatar_url)"`.
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "eq", value)
    }

    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "gte", value)
    }

    /// Membership filter over a list of values, e.g. ids of favorited events.
    pub fn in_list<T: Display>(mut self, column: &str, values: &[T]) -> Self {
        let rendered: Vec<String> = values
            .iter()
            .map(|v| urlencoding::encode(&v.to_string()).into_owned())
            .collect();
        self.filters
            .push(format!("{}=in.({})", column, rendered.join(",")));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some(format!("{}.{}", column, order.suffix()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn filter(mut self, column: &str, op: &str, value: impl Display) -> Self {
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        self.filters.push(format!("{}={}.{}", column, op, encoded));
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Renders the full endpoint URL for this query.
    pub fn url(&self, config: &Config) -> String {
        let mut params = Vec::new();

        if let Some(select) = &self.select {
            params.push(format!("select={}", select));
        }
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(format!("order={}", order));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        let base = format!("{}/rest/v1/{}", config.backend_url, self.collection);
        if params.is_empty() {
            base
        } else {
            format!("{}?{}", base, params.join("&"))
        }
    }
}

#[cfg(feature = "web")]
pub use exec::{delete_rows, fetch_one, fetch_rows, insert_row, update_rows};

#[cfg(feature = "web")]
mod exec {
    use reqwasm::http::{Request, Response};
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Serialize};

    use super::{OnConflict, Query};
    use crate::data::{auth::Session, Config, DataError};

    /// Error body shape returned by the data endpoint.
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    fn bearer(config: &Config, session: Option<&Session>) -> String {
        let token = session
            .map(|s| s.access_token.as_str())
            .unwrap_or(config.anon_key.as_str());
        format!("Bearer {}", token)
    }

    async fn reject(response: Response) -> DataError {
        let code = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.unwrap_or_default(),
            Err(_) => response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string()),
        };

        DataError::Status { code, message }
    }

    /// Executes a read query, decoding the rows into typed records.
    pub async fn fetch_rows<T: DeserializeOwned>(
        config: &Config,
        session: Option<&Session>,
        query: &Query,
    ) -> Result<Vec<T>, DataError> {
        let response = Request::get(&query.url(config))
            .header("apikey", &config.anon_key)
            .header("Authorization", &bearer(config, session))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status()) {
            return Err(reject(response).await);
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| DataError::Decode(e.to_string()))
    }

    /// Executes a read query expected to match at most one row.
    pub async fn fetch_one<T: DeserializeOwned>(
        config: &Config,
        session: Option<&Session>,
        query: &Query,
    ) -> Result<Option<T>, DataError> {
        let rows = fetch_rows::<T>(config, session, query).await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts one row into a collection.
    pub async fn insert_row<T: Serialize>(
        config: &Config,
        session: &Session,
        collection: &str,
        row: &T,
        on_conflict: OnConflict,
    ) -> Result<(), DataError> {
        let url = format!("{}/rest/v1/{}", config.backend_url, collection);
        let body = serde_json::to_string(row).map_err(|e| DataError::Decode(e.to_string()))?;
        let prefer = match on_conflict {
            OnConflict::Error => "return=minimal",
            OnConflict::Ignore => "return=minimal,resolution=ignore-duplicates",
        };

        let response = Request::post(&url)
            .header("apikey", &config.anon_key)
            .header("Authorization", &bearer(config, Some(session)))
            .header("Content-Type", "application/json")
            .header("Prefer", prefer)
            .body(body)
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status()) {
            return Err(reject(response).await);
        }

        Ok(())
    }

    /// Patches every row matched by the query's filters.
    pub async fn update_rows<T: Serialize>(
        config: &Config,
        session: &Session,
        query: &Query,
        patch: &T,
    ) -> Result<(), DataError> {
        let body = serde_json::to_string(patch).map_err(|e| DataError::Decode(e.to_string()))?;

        let response = Request::patch(&query.url(config))
            .header("apikey", &config.anon_key)
            .header("Authorization", &bearer(config, Some(session)))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status()) {
            return Err(reject(response).await);
        }

        Ok(())
    }

    /// Deletes every row matched by the query's filters.
    ///
    /// Deleting an already-absent row matches zero rows and still succeeds,
    /// which is what makes the membership toggle's delete idempotent.
    pub async fn delete_rows(
        config: &Config,
        session: &Session,
        query: &Query,
    ) -> Result<(), DataError> {
        let response = Request::delete(&query.url(config))
            .header("apikey", &config.anon_key)
            .header("Authorization", &bearer(config, Some(session)))
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status()) {
            return Err(reject(response).await);
        }

        Ok(())
    }
}
