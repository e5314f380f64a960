use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaHeart};
use dioxus_free_icons::Icon;

use crate::client::hooks::use_membership;
use crate::membership::MembershipKind;

/// Heart button flipping the favorite relationship for one event.
#[component]
pub fn FavoriteButton(event_id: i64) -> Element {
    let handle = use_membership(MembershipKind::Favorite, event_id, None);

    let class = if handle.is_member() {
        "btn btn-sm btn-secondary"
    } else {
        "btn btn-sm btn-outline"
    };

    rsx!(
        button {
            class: "{class}",
            disabled: handle.busy(),
            onclick: move |_| handle.toggle(),
            Icon {
                width: 16,
                height: 16,
                icon: FaHeart
            }
        }
    )
}

/// Attend/attending button flipping the attendance relationship.
///
/// `on_change` fires with the new membership after a landed write so the
/// embedding view can refetch whatever the flip invalidated.
#[component]
pub fn AttendButton(event_id: i64, on_change: Option<EventHandler<bool>>) -> Element {
    let handle = use_membership(MembershipKind::Attendance, event_id, on_change);

    let (class, label) = if handle.is_member() {
        ("btn btn-success flex gap-2", "Attending")
    } else {
        ("btn btn-outline flex gap-2", "Attend")
    };

    rsx!(
        button {
            class: "{class}",
            disabled: handle.busy(),
            onclick: move |_| handle.toggle(),
            Icon {
                width: 16,
                height: 16,
                icon: FaCheck
            }
            p { "{label}" }
        }
    )
}
