use dioxus::prelude::*;

use crate::client::components::FavoriteButton;
use crate::client::router::Route;
use crate::model::Event;

#[component]
pub fn EventCard(event: Event) -> Element {
    let starts = event.starts_at.format("%Y-%m-%d %H:%M UTC").to_string();

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm w-full",
            div {
                class: "card-body",
                div { class: "flex justify-between items-start gap-2",
                    h2 { class: "card-title",
                        Link {
                            to: Route::EventDetail { id: event.id },
                            "{event.title}"
                        }
                    }
                    FavoriteButton { event_id: event.id }
                }
                div { class: "flex flex-wrap gap-2 items-center",
                    span { class: "badge badge-primary",
                        "{event.event_type.label()}"
                    }
                    span { "{starts}" }
                }
                if let Some(address) = &event.address {
                    p { class: "text-sm opacity-70",
                        "{address}"
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
            }
        }
    )
}
