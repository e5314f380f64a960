use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::SessionState;
use crate::model::Profile;

const PROFILE_PAGE_LIMIT: u32 = 100;

#[component]
pub fn Community() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut profiles = use_signal(Vec::<Profile>::new);

    #[cfg(feature = "web")]
    {
        let config = use_context::<crate::data::Config>();
        let resource = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                crate::data::profiles::fetch_all(&config, session.as_ref(), PROFILE_PAGE_LIMIT)
                    .await
            }
        });

        use_effect(move || match &*resource.read_unchecked() {
            Some(Ok(fetched)) => profiles.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch profiles: {}", err),
            None => (),
        });
    }

    rsx!(
        Title { "Community | Revmeet" }
        Meta {
            name: "description",
            content: "Drivers in the Revmeet community."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-2",
                {profiles.read().iter().map(|profile| {
                    let user_id = profile.id.clone();
                    rsx!(
                        Link {
                            key: "{profile.id}",
                            to: Route::PublicProfile { user_id },
                            div { class: "card bg-base-100 shadow-sm",
                                div { class: "card-body flex-row items-center gap-2",
                                    div { class: "avatar",
                                        div { class: "w-12 rounded-full",
                                            if let Some(avatar) = &profile.avatar_url {
                                                img { src: "{avatar}", alt: "{profile.username}" }
                                            } else {
                                                div { class: "bg-base-300 w-12 h-12 rounded-full" }
                                            }
                                        }
                                    }
                                    p { class: "font-semibold",
                                        "{profile.username}"
                                    }
                                }
                            }
                        }
                    )
                })}
            }
        }
    )
}
