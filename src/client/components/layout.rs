use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::session::SessionState;

/// Layout guarding session-only routes (garage, own profile).
///
/// Until restoration has been attempted nothing is rendered; once the answer
/// is final an unauthenticated visitor is redirected to the login route.
#[component]
pub fn RequireSession() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let navigator = use_navigator();

    let state = session_store.read();
    if !state.fetched {
        return rsx!(
            div { class: "min-h-screen pt-[64px] p-4 flex justify-center",
                div { class: "skeleton h-32 w-full max-w-96" }
            }
        );
    }
    if state.session.is_none() {
        navigator.replace(Route::Login {});
        return rsx!();
    }

    rsx!(Outlet::<Route> {})
}

/// Inverse guard for the login route: an authenticated visitor goes home.
#[component]
pub fn RequireGuest() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let navigator = use_navigator();

    if session_store.read().signed_in() {
        navigator.replace(Route::Home {});
        return rsx!();
    }

    rsx!(Outlet::<Route> {})
}
