use serde::{Deserialize, Serialize};

/// A community member's public profile, one row per authenticated identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Matches the auth user id of the owning identity.
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
}
