use dioxus::prelude::*;

use crate::client::components::{BrandLink, Toast};
use crate::client::router::Route;
use crate::client::store::session::SessionState;

#[component]
pub fn Navbar() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let signed_in = session_store.read().signed_in();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-[1100]",
            div {
                class: "navbar-start",
                BrandLink {}
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li {
                        Link { to: Route::MapView {}, "Map" }
                    }
                    li {
                        Link { to: Route::Events {}, "Events" }
                    }
                    li {
                        Link { to: Route::Community {}, "Community" }
                    }
                    if signed_in {
                        li {
                            Link { to: Route::Garage {}, "Garage" }
                        }
                        li {
                            Link { to: Route::Profile {}, "Profile" }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if signed_in {
                    SignOutButton {}
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-28",
                        "Sign In"
                    }
                }
            }
        }

        Toast {}

        Outlet::<Route> {}
    }
}

#[component]
fn SignOutButton() -> Element {
    let mut session_store = use_context::<Store<SessionState>>();
    let config = use_context::<crate::data::Config>();

    let on_click = move |_| {
        let config = config.clone();
        #[cfg(feature = "web")]
        {
            let session = session_store.peek().session.clone();
            spawn(async move {
                if let Some(session) = session {
                    crate::data::auth::sign_out(&config, &session).await;
                }
                session_store.write().session = None;
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&config, &mut session_store);
        }
    };

    rsx!(
        button {
            class: "btn btn-outline",
            onclick: on_click,
            "Sign Out"
        }
    )
}
