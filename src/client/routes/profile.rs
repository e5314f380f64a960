use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::{EventCard, Page};
use crate::client::store::{notifications::Notifications, session::SessionState};
use crate::model::{Event, Profile as ProfileRow};

#[component]
pub fn Profile() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut notifications = use_context::<Store<Notifications>>();
    let config = use_context::<crate::data::Config>();

    let mut profile = use_signal(|| None::<ProfileRow>);
    let mut username = use_signal(String::new);
    let mut my_events = use_signal(Vec::<Event>::new);
    let mut favorite_events = use_signal(Vec::<Event>::new);
    let mut saving = use_signal(|| false);

    #[cfg(feature = "web")]
    let profile_resource = {
        let config = config.clone();
        let resource = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                let Some(session) = session else {
                    return Ok(None);
                };
                crate::data::profiles::fetch_by_id(&config, Some(&session), &session.user.id)
                    .await
            }
        });

        use_effect(move || match &*resource.read_unchecked() {
            Some(Ok(fetched)) => {
                if let Some(fetched) = fetched {
                    username.set(fetched.username.clone());
                }
                profile.set(fetched.clone());
            }
            Some(Err(err)) => tracing::error!("Failed to fetch profile: {}", err),
            None => (),
        });

        resource
    };

    #[cfg(feature = "web")]
    {
        let config = config.clone();
        let owned = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                let Some(session) = session else {
                    return Ok(Vec::new());
                };
                crate::data::events::fetch_by_owner(&config, Some(&session), &session.user.id)
                    .await
            }
        });
        use_effect(move || match &*owned.read_unchecked() {
            Some(Ok(fetched)) => my_events.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch own events: {}", err),
            None => (),
        });
    }

    #[cfg(feature = "web")]
    {
        let config = config.clone();
        // Favorites resolve in two steps: membership rows, then the event
        // rows behind their ids with an `in` filter.
        let favorites = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                let Some(session) = session else {
                    return Ok(Vec::new());
                };
                let query = crate::membership::by_user_query(
                    crate::membership::MembershipKind::Favorite,
                    &session.user.id,
                );
                let rows: Vec<crate::model::MembershipRow> =
                    crate::data::rest::fetch_rows(&config, Some(&session), &query).await?;
                let ids: Vec<i64> = rows.into_iter().map(|r| r.event_id).collect();
                crate::data::events::fetch_by_ids(&config, Some(&session), &ids).await
            }
        });
        use_effect(move || match &*favorites.read_unchecked() {
            Some(Ok(fetched)) => favorite_events.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch favorites: {}", err),
            None => (),
        });
    }

    let on_save = {
        let config = config.clone();
        move |_| {
            let config = config.clone();
            #[cfg(feature = "web")]
            {
                let Some(session) = session_store.peek().session.clone() else {
                    return;
                };
                let username_value = username.peek().trim().to_string();
                if username_value.is_empty() {
                    notifications.write().error("A username is required.");
                    return;
                }
                if *saving.peek() {
                    return;
                }

                saving.set(true);
                spawn(async move {
                    match crate::data::profiles::update(&config, &session, &username_value, None)
                        .await
                    {
                        Ok(()) => notifications.write().info("Profile saved."),
                        Err(err) => {
                            tracing::error!("Failed to update profile: {}", err);
                            notifications.write().error("Could not save the profile.");
                        }
                    }
                    saving.set(false);
                });
            }
            #[cfg(not(feature = "web"))]
            {
                let _ = (&config, &session_store, &mut saving, &mut notifications);
            }
        }
    };

    let on_avatar = move |evt: FormEvent| {
        let config = config.clone();
        #[cfg(feature = "web")]
        {
            let Some(session) = session_store.peek().session.clone() else {
                return;
            };
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let username_value = username.peek().trim().to_string();

            spawn(async move {
                let name = file.name();
                let Ok(bytes) = file.read_bytes().await else {
                    notifications.write().error("Could not read the image.");
                    return;
                };

                let path = crate::data::storage::object_path(&session.user.id, &name);
                let uploaded = crate::data::storage::upload(
                    &config,
                    &session,
                    &config.avatar_bucket,
                    &path,
                    &bytes,
                )
                .await;

                // The upload is not rolled back if the row update fails; the
                // profile simply keeps pointing at the previous image.
                let result = match uploaded {
                    Ok(url) => {
                        crate::data::profiles::update(
                            &config,
                            &session,
                            &username_value,
                            Some(&url),
                        )
                        .await
                    }
                    Err(err) => Err(err),
                };

                match result {
                    Ok(()) => {
                        let mut profile_resource = profile_resource;
                        profile_resource.restart();
                    }
                    Err(err) => {
                        tracing::error!("Avatar upload failed: {}", err);
                        notifications.write().error("Could not upload the avatar.");
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&config, evt, &session_store, &mut notifications);
        }
    };

    rsx!(
        Title { "Profile | Revmeet" }
        Meta {
            name: "description",
            content: "Your Revmeet profile."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[720px] flex flex-col gap-6",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body flex flex-col items-center gap-2",
                        div { class: "avatar",
                            div { class: "w-24 rounded-full",
                                if let Some(avatar) = profile.read().as_ref().and_then(|p| p.avatar_url.clone()) {
                                    img { src: "{avatar}", alt: "avatar" }
                                } else {
                                    div { class: "bg-base-300 w-24 h-24 rounded-full" }
                                }
                            }
                        }
                        input {
                            class: "file-input file-input-bordered w-full max-w-96",
                            r#type: "file",
                            accept: "image/*",
                            onchange: on_avatar,
                        }
                        div { class: "flex gap-2 w-full max-w-96",
                            input {
                                class: "input input-bordered flex-1",
                                placeholder: "Username",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: *saving.read(),
                                onclick: on_save,
                                "Save"
                            }
                        }
                    }
                }
                div { class: "flex flex-col gap-2",
                    h2 { class: "text-xl font-bold", "My Events" }
                    if my_events.read().is_empty() {
                        p { class: "opacity-70", "You have not hosted any events yet." }
                    }
                    {my_events.read().iter().cloned().map(|event| {
                        let id = event.id;
                        rsx!(EventCard { key: "{id}", event })
                    })}
                }
                div { class: "flex flex-col gap-2",
                    h2 { class: "text-xl font-bold", "Favorites" }
                    if favorite_events.read().is_empty() {
                        p { class: "opacity-70", "No favorite events yet." }
                    }
                    {favorite_events.read().iter().cloned().map(|event| {
                        let id = event.id;
                        rsx!(EventCard { key: "{id}", event })
                    })}
                }
            }
        }
    )
}
