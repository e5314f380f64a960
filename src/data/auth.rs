//! Session acquisition against the GoTrue-style auth endpoint.
//!
//! The auth subsystem itself is external; this module only exchanges
//! credentials for a session token, persists the session in localStorage so a
//! reload keeps the user signed in, and clears it again on sign-out.

use serde::{Deserialize, Serialize};

/// The authenticated identity behind a session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// An authenticated session for the current browser tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// localStorage key under which the session survives reloads.
pub const SESSION_STORAGE_KEY: &str = "revmeet.session";

#[cfg(feature = "web")]
pub use web::{clear_session, persist_session, restore_session, sign_in, sign_out, sign_up};

#[cfg(feature = "web")]
mod web {
    use dioxus_logger::tracing;
    use reqwasm::http::Request;
    use serde_json::json;

    use super::{Session, SESSION_STORAGE_KEY};
    use crate::data::{Config, DataError};

    /// Exchanges email/password credentials for a session.
    pub async fn sign_in(
        config: &Config,
        email: &str,
        password: &str,
    ) -> Result<Session, DataError> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            config.backend_url
        );
        request_session(config, &url, email, password).await
    }

    /// Registers a new identity and returns its session.
    ///
    /// The caller is responsible for creating the matching profile row; the
    /// auth endpoint knows nothing about the `profiles` collection.
    pub async fn sign_up(
        config: &Config,
        email: &str,
        password: &str,
    ) -> Result<Session, DataError> {
        let url = format!("{}/auth/v1/signup", config.backend_url);
        request_session(config, &url, email, password).await
    }

    /// Revokes the session token. Best effort: local state is cleared even
    /// when the revocation request fails.
    pub async fn sign_out(config: &Config, session: &Session) {
        let url = format!("{}/auth/v1/logout", config.backend_url);
        let result = Request::post(&url)
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await;

        if let Err(err) = result {
            tracing::warn!("Failed to revoke session: {}", err);
        }

        clear_session();
    }

    async fn request_session(
        config: &Config,
        url: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, DataError> {
        let body = json!({ "email": email, "password": password }).to_string();

        let response = Request::post(url)
            .header("apikey", &config.anon_key)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status()) {
            #[derive(serde::Deserialize)]
            struct AuthErrorBody {
                error_description: Option<String>,
                msg: Option<String>,
            }

            let code = response.status();
            let message = match response.json::<AuthErrorBody>().await {
                Ok(body) => body
                    .error_description
                    .or(body.msg)
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };

            return Err(DataError::Status { code, message });
        }

        response
            .json::<Session>()
            .await
            .map_err(|e| DataError::Decode(e.to_string()))
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Stores the session so a page reload restores it. Best effort.
    pub fn persist_session(session: &Session) {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(serialized) => {
                if storage.set_item(SESSION_STORAGE_KEY, &serialized).is_err() {
                    tracing::warn!("Failed to persist session to localStorage");
                }
            }
            Err(err) => tracing::warn!("Failed to serialize session: {}", err),
        }
    }

    /// Restores a previously persisted session, if any survives in storage.
    pub fn restore_session() -> Option<Session> {
        let storage = local_storage()?;
        let serialized = storage.get_item(SESSION_STORAGE_KEY).ok()??;
        serde_json::from_str(&serialized).ok()
    }

    pub fn clear_session() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}
