use chrono::NaiveDateTime;
use dioxus::prelude::*;

use crate::client::store::{notifications::Notifications, session::SessionState};
use crate::data::Config;
use crate::model::EventType;

/// Inline form creating a new event.
///
/// The map view prefills coordinates from a map click; the events view
/// starts blank and resolves coordinates from the address lookup. Required
/// fields are title, start time, and a resolved coordinate pair; everything
/// else is optional.
///
/// The prefill props are reactive: a second map click or a late-arriving
/// reverse-geocode result lands in the form while it is mounted.
#[component]
pub fn EventForm(
    initial_coords: ReadSignal<Option<(f64, f64)>>,
    initial_address: ReadSignal<Option<String>>,
    on_created: EventHandler<()>,
) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut notifications = use_context::<Store<Notifications>>();
    let config = use_context::<Config>();

    let mut title = use_signal(String::new);
    let mut event_type = use_signal(|| EventType::Meet);
    let mut starts_at = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut coords = use_signal(|| None::<(f64, f64)>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if let Some(pair) = initial_coords() {
            coords.set(Some(pair));
        }
    });
    use_effect(move || {
        if let Some(prefill) = initial_address() {
            address.set(prefill);
        }
    });

    let lookup_config = config.clone();
    let on_lookup = move |_| {
        let config = lookup_config.clone();
        #[cfg(feature = "web")]
        {
            let query = address.peek().clone();
            if query.trim().is_empty() {
                notifications.write().error("Enter an address to look up.");
                return;
            }
            spawn(async move {
                match crate::data::geocode::forward(&config, &query).await {
                    Ok(Some(pair)) => coords.set(Some(pair)),
                    Ok(None) => notifications.write().error("Address not found."),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Address lookup failed: {}", err);
                        notifications.write().error("Address lookup failed.");
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&config, &address, &mut coords, &mut notifications);
        }
    };

    let on_submit = move |_| {
        let config = config.clone();
        #[cfg(feature = "web")]
        {
            let Some(session) = session_store.peek().session.clone() else {
                notifications.write().info("Sign in to create an event.");
                return;
            };
            if *submitting.peek() {
                return;
            }

            let title_value = title.peek().trim().to_string();
            if title_value.is_empty() {
                notifications.write().error("A title is required.");
                return;
            }
            let Ok(naive) =
                NaiveDateTime::parse_from_str(starts_at.peek().as_str(), "%Y-%m-%dT%H:%M")
            else {
                notifications.write().error("A start time is required.");
                return;
            };
            let Some((latitude, longitude)) = *coords.peek() else {
                notifications
                    .write()
                    .error("Pick a location on the map or look up an address.");
                return;
            };

            let address_value = address.peek().trim().to_string();
            let description_value = description.peek().trim().to_string();
            let event = crate::model::event::NewEvent {
                title: title_value,
                event_type: *event_type.peek(),
                starts_at: naive.and_utc(),
                latitude,
                longitude,
                address: (!address_value.is_empty()).then_some(address_value),
                description: (!description_value.is_empty()).then_some(description_value),
                owner_id: session.user.id.clone(),
            };

            submitting.set(true);
            spawn(async move {
                match crate::data::events::create(&config, &session, &event).await {
                    Ok(()) => {
                        notifications.write().info("Event created.");
                        title.set(String::new());
                        starts_at.set(String::new());
                        description.set(String::new());
                        on_created.call(());
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to create event: {}", err);
                        notifications.write().error("Could not create the event.");
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&config, &session_store, &mut submitting, &mut notifications);
        }
    };

    rsx!(
        form {
            class: "flex flex-col gap-2 w-full max-w-96",
            onsubmit: on_submit,
            input {
                class: "input input-bordered w-full",
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| {
                    if let Some(selected) = EventType::from_str(&evt.value()) {
                        event_type.set(selected);
                    }
                },
                {EventType::ALL.iter().map(|t| rsx!(
                    option {
                        value: "{t.as_str()}",
                        selected: *event_type.read() == *t,
                        "{t.label()}"
                    }
                ))}
            }
            input {
                class: "input input-bordered w-full",
                r#type: "datetime-local",
                value: "{starts_at}",
                oninput: move |evt| starts_at.set(evt.value()),
            }
            div { class: "flex gap-2",
                input {
                    class: "input input-bordered flex-1",
                    placeholder: "Address",
                    value: "{address}",
                    oninput: move |evt| address.set(evt.value()),
                }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: on_lookup,
                    "Look up"
                }
            }
            if let Some((latitude, longitude)) = *coords.read() {
                p { class: "text-xs opacity-70",
                    "Location: {latitude:.5}, {longitude:.5}"
                }
            }
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Description (optional)",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: *submitting.read(),
                "Create Event"
            }
        }
    )
}
