use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::{notifications::Notifications, session::SessionState};
use crate::data::Config;

#[component]
pub fn App() -> Element {
    use_context_provider(Config::from_build_env);

    let session = use_store(SessionState::default);
    use_context_provider(move || session);

    let notifications = use_store(Notifications::default);
    use_context_provider(move || notifications);

    // Best-effort restore of a persisted session. `fetched` flips either way
    // so gated views know the answer is final.
    #[cfg(feature = "web")]
    {
        let mut session = session;
        use_effect(move || {
            let restored = crate::data::auth::restore_session();
            let mut state = session.write();
            state.session = restored;
            state.fetched = true;
        });
    }

    rsx!(Router::<Route> {})
}
