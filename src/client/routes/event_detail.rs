use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::{AttendButton, FavoriteButton, Page};
use crate::client::router::Route;
use crate::client::store::session::SessionState;
use crate::model::Event;

#[component]
pub fn EventDetail(id: i64) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut event = use_signal(|| None::<Event>);
    let mut attendee_count = use_signal(|| None::<usize>);

    #[cfg(feature = "web")]
    let on_attend_change = {
        let config = use_context::<crate::data::Config>();

        let detail = use_resource({
            let config = config.clone();
            move || {
                let config = config.clone();
                let session = session_store.read().session.clone();
                async move { crate::data::events::fetch_by_id(&config, session.as_ref(), id).await }
            }
        });
        use_effect(move || match &*detail.read_unchecked() {
            Some(Ok(fetched)) => event.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch event {}: {}", id, err),
            None => (),
        });

        let attendees = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                let query = crate::membership::by_event_query(
                    crate::membership::MembershipKind::Attendance,
                    id,
                );
                crate::data::rest::fetch_rows::<crate::model::MembershipRow>(
                    &config,
                    session.as_ref(),
                    &query,
                )
                .await
            }
        });
        use_effect(move || match &*attendees.read_unchecked() {
            Some(Ok(rows)) => attendee_count.set(Some(rows.len())),
            Some(Err(err)) => tracing::error!("Failed to fetch attendees: {}", err),
            None => (),
        });

        // A landed attendance write invalidates the fetched count.
        use_callback(move |_: bool| {
            let mut attendees = attendees;
            attendees.restart();
        })
    };
    #[cfg(not(feature = "web"))]
    let on_attend_change = use_callback(move |_: bool| {});

    rsx!(
        Title { "Event | Revmeet" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[720px] flex flex-col gap-4",
                if let Some(event) = &*event.read() {
                    div { class: "flex justify-between items-start gap-2",
                        h1 { class: "text-2xl font-bold",
                            "{event.title}"
                        }
                        div { class: "flex gap-2",
                            FavoriteButton { event_id: event.id }
                            AttendButton {
                                event_id: event.id,
                                on_change: move |is_member: bool| on_attend_change.call(is_member),
                            }
                        }
                    }
                    div { class: "flex flex-wrap gap-2 items-center",
                        span { class: "badge badge-primary",
                            "{event.event_type.label()}"
                        }
                        span {
                            {event.starts_at.format("%Y-%m-%d %H:%M UTC").to_string()}
                        }
                        if let Some(count) = *attendee_count.read() {
                            span { class: "badge badge-ghost",
                                "{count} attending"
                            }
                        }
                    }
                    if let Some(address) = &event.address {
                        p { class: "opacity-70",
                            "{address}"
                        }
                    }
                    if let Some(description) = &event.description {
                        p {
                            "{description}"
                        }
                    }
                    if let Some(owner) = &event.owner {
                        p { class: "text-sm",
                            "Hosted by "
                            Link {
                                to: Route::PublicProfile { user_id: owner.id.clone() },
                                class: "link",
                                "{owner.username}"
                            }
                        }
                    }
                } else {
                    div { class: "skeleton h-48 w-full" }
                }
            }
        }
    )
}
