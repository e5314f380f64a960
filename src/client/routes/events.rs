use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::{event_form::EventForm, EventCard, Page};
use crate::client::store::session::SessionState;
use crate::data::Config;
use crate::model::{Event, EventFilter, EventType};

/// Number of upcoming events fetched per visit.
const EVENT_PAGE_LIMIT: u32 = 50;

#[component]
pub fn Events() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut events = use_signal(Vec::<Event>::new);
    let mut filter = use_signal(EventFilter::default);
    let mut show_form = use_signal(|| false);

    #[cfg(feature = "web")]
    let resource = {
        let config = use_context::<Config>();
        let resource = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                crate::data::events::fetch_upcoming(&config, session.as_ref(), EVENT_PAGE_LIMIT)
                    .await
            }
        });

        use_effect(move || match &*resource.read_unchecked() {
            Some(Ok(fetched)) => events.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch events: {}", err),
            None => (),
        });

        resource
    };

    let visible = filter.read().apply(&events.read());
    let signed_in = session_store.read().signed_in();

    rsx!(
        Title { "Events | Revmeet" }
        Meta {
            name: "description",
            content: "Upcoming car meets, cruises, track days, and shows."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] flex flex-col gap-4",
                div { class: "flex flex-wrap gap-2 items-center",
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "Search by title",
                        value: "{filter.read().text}",
                        oninput: move |evt| filter.write().text = evt.value(),
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            filter.write().event_type = EventType::from_str(&evt.value());
                        },
                        option { value: "", "All types" }
                        {EventType::ALL.iter().map(|t| rsx!(
                            option { value: "{t.as_str()}", "{t.label()}" }
                        ))}
                    }
                    if signed_in {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let shown = *show_form.peek();
                                show_form.set(!shown);
                            },
                            if *show_form.read() { "Close" } else { "New Event" }
                        }
                    }
                }
                if *show_form.read() {
                    div { class: "flex justify-center",
                        EventForm {
                            initial_coords: None::<(f64, f64)>,
                            initial_address: None::<String>,
                            on_created: move |_| {
                                show_form.set(false);
                                #[cfg(feature = "web")]
                                {
                                    let mut resource = resource;
                                    resource.restart();
                                }
                            },
                        }
                    }
                }
                if visible.is_empty() {
                    p { class: "text-center opacity-70 py-8",
                        "No upcoming events match."
                    }
                } else {
                    div { class: "flex flex-col gap-2",
                        {visible.into_iter().map(|event| {
                            let id = event.id;
                            rsx!(EventCard { key: "{id}", event })
                        })}
                    }
                }
            }
        }
    )
}
