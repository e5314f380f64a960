use dioxus::prelude::*;

use crate::client::store::notifications::{NoticeKind, Notifications};

/// Renders the pending notices as dismissible alerts above the page.
#[component]
pub fn Toast() -> Element {
    let mut notifications = use_context::<Store<Notifications>>();

    let notices = notifications.read().notices.clone();
    if notices.is_empty() {
        return rsx!();
    }

    rsx!(
        div { class: "toast toast-top toast-end z-[1200] mt-16",
            {notices.into_iter().map(|notice| {
                let alert_class = match notice.kind {
                    NoticeKind::Info => "alert alert-info",
                    NoticeKind::Error => "alert alert-error",
                };
                let id = notice.id;

                rsx!(
                    div {
                        key: "{id}",
                        class: "{alert_class} flex gap-2",
                        span { "{notice.message}" }
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| notifications.write().dismiss(id),
                            "✕"
                        }
                    }
                )
            })}
        }
    )
}
