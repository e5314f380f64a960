//! Hook embedding a membership toggle into a view.
//!
//! Checks the (user, event) pair once on mount and whenever the session
//! changes, then drives idempotent insert/delete writes through
//! [`run_toggle`](crate::membership::run_toggle). A toggle without a session
//! never touches the network and surfaces a sign-in prompt instead.

use dioxus::prelude::*;

use crate::client::store::{notifications::Notifications, session::SessionState};
use crate::data::Config;
use crate::membership::{MembershipKind, MembershipToggle};

pub const SIGN_IN_NOTICE: &str = "Sign in to favorite or attend events.";

/// Toggle state and trigger exposed to the embedding view.
#[derive(Clone, Copy)]
pub struct MembershipHandle {
    toggle: Signal<MembershipToggle>,
    on_toggle: Callback<()>,
}

impl MembershipHandle {
    pub fn is_member(&self) -> bool {
        self.toggle.read().is_member()
    }

    pub fn busy(&self) -> bool {
        self.toggle.read().busy()
    }

    pub fn toggle(&self) {
        self.on_toggle.call(());
    }
}

/// `on_flip` fires with the new membership after a landed write, so views
/// can refetch rows the toggle invalidated (the detail view's attendee
/// count). Guarded and failed toggles never fire it.
pub fn use_membership(
    kind: MembershipKind,
    event_id: i64,
    on_flip: Option<EventHandler<bool>>,
) -> MembershipHandle {
    let config = use_context::<Config>();
    let session_store = use_context::<Store<SessionState>>();
    let mut notifications = use_context::<Store<Notifications>>();
    let mut toggle = use_signal(MembershipToggle::new);

    // Mount-time pair check; re-runs when the session store changes.
    #[cfg(feature = "web")]
    {
        let config = config.clone();
        let check = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                let session = session?;
                let api = crate::membership::RestMembershipApi::new(config, session.clone());
                let row = crate::model::MembershipRow {
                    user_id: session.user.id.clone(),
                    event_id,
                };
                crate::membership::MembershipApi::check(&api, kind, &row)
                    .await
                    .ok()
            }
        });

        use_effect(move || {
            if let Some(Some(is_member)) = *check.read() {
                toggle.write().set_known(is_member);
            }
        });
    }

    let on_toggle = use_callback(move |_| {
        #[cfg(feature = "web")]
        {
            let config = config.clone();
            spawn(async move {
                use crate::membership::{run_toggle, ToggleAction, ToggleOutcome};

                let mut state = *toggle.peek();
                let session = session_store.peek().session.clone();

                match state.plan(session.as_ref()) {
                    ToggleAction::SignInRequired => {
                        notifications.write().info(SIGN_IN_NOTICE);
                        return;
                    }
                    ToggleAction::Busy => return,
                    ToggleAction::Insert | ToggleAction::Delete => {}
                }
                let Some(session) = session else {
                    return;
                };

                // Mark the signal busy for the UI while the copy runs the write.
                toggle.write().begin();
                let api = crate::membership::RestMembershipApi::new(config, session.clone());
                let outcome = run_toggle(&mut state, &api, Some(&session), kind, event_id).await;
                toggle.set(state);

                if outcome == ToggleOutcome::Failed {
                    notifications
                        .write()
                        .error("Could not update the event, please try again.");
                } else if let Some(is_member) = outcome.flipped() {
                    if let Some(on_flip) = on_flip {
                        on_flip.call(is_member);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&config, &toggle, &session_store, &mut notifications, &on_flip);
        }
    });

    MembershipHandle { toggle, on_toggle }
}
