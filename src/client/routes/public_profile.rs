use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::{EventCard, Page};
use crate::client::store::session::SessionState;
use crate::model::{Event, Profile, Vehicle};

#[component]
pub fn PublicProfile(user_id: String) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut profile = use_signal(|| None::<Profile>);
    let mut vehicles = use_signal(Vec::<Vehicle>::new);
    let mut events = use_signal(Vec::<Event>::new);

    #[cfg(feature = "web")]
    {
        let config = use_context::<crate::data::Config>();

        let profile_resource = use_resource({
            let config = config.clone();
            let user_id = user_id.clone();
            move || {
                let config = config.clone();
                let user_id = user_id.clone();
                let session = session_store.read().session.clone();
                async move {
                    crate::data::profiles::fetch_by_id(&config, session.as_ref(), &user_id).await
                }
            }
        });
        use_effect(move || match &*profile_resource.read_unchecked() {
            Some(Ok(fetched)) => profile.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch profile: {}", err),
            None => (),
        });

        let garage_resource = use_resource({
            let config = config.clone();
            let user_id = user_id.clone();
            move || {
                let config = config.clone();
                let user_id = user_id.clone();
                let session = session_store.read().session.clone();
                async move {
                    crate::data::vehicles::fetch_by_owner(&config, session.as_ref(), &user_id)
                        .await
                }
            }
        });
        use_effect(move || match &*garage_resource.read_unchecked() {
            Some(Ok(fetched)) => vehicles.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch vehicles: {}", err),
            None => (),
        });

        let events_resource = use_resource({
            let config = config.clone();
            let user_id = user_id.clone();
            move || {
                let config = config.clone();
                let user_id = user_id.clone();
                let session = session_store.read().session.clone();
                async move {
                    crate::data::events::fetch_by_owner(&config, session.as_ref(), &user_id).await
                }
            }
        });
        use_effect(move || match &*events_resource.read_unchecked() {
            Some(Ok(fetched)) => events.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch events: {}", err),
            None => (),
        });
    }

    rsx!(
        Title { "Driver | Revmeet" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[720px] flex flex-col gap-6",
                if let Some(profile) = &*profile.read() {
                    div { class: "flex items-center gap-4",
                        div { class: "avatar",
                            div { class: "w-20 rounded-full",
                                if let Some(avatar) = &profile.avatar_url {
                                    img { src: "{avatar}", alt: "{profile.username}" }
                                } else {
                                    div { class: "bg-base-300 w-20 h-20 rounded-full" }
                                }
                            }
                        }
                        h1 { class: "text-2xl font-bold",
                            "{profile.username}"
                        }
                    }
                } else {
                    div { class: "skeleton h-20 w-full max-w-96" }
                }
                div { class: "flex flex-col gap-2",
                    h2 { class: "text-xl font-bold", "Garage" }
                    if vehicles.read().is_empty() {
                        p { class: "opacity-70", "Nothing in the garage yet." }
                    }
                    div { class: "flex flex-wrap gap-2",
                        {vehicles.read().iter().map(|vehicle| rsx!(
                            div {
                                key: "{vehicle.id}",
                                class: "badge badge-outline p-4",
                                "{vehicle.year} {vehicle.make} {vehicle.model} · {vehicle.power_hp} hp"
                            }
                        ))}
                    }
                }
                div { class: "flex flex-col gap-2",
                    h2 { class: "text-xl font-bold", "Hosted Events" }
                    if events.read().is_empty() {
                        p { class: "opacity-70", "No hosted events." }
                    }
                    {events.read().iter().cloned().map(|event| {
                        let id = event.id;
                        rsx!(EventCard { key: "{id}", event })
                    })}
                }
            }
        }
    )
}
