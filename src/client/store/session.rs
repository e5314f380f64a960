use crate::data::auth::Session;

/// Authenticated-session state provided as explicit context at the app root.
///
/// Views read it reactively instead of subscribing to a global auth stream;
/// sign-in, sign-up, and sign-out flows write the new session through the
/// store, and the provider's lifetime is the app's lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True once restoration from localStorage has been attempted, letting
    /// views distinguish "signed out" from "not yet known".
    pub fetched: bool,
}

impl SessionState {
    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.id.as_str())
    }
}
