use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page { class: "flex items-center justify-center",
            p { "There is nothing parked here." }
        }
    )
}
