use dioxus::prelude::*;

/// Route shell clearing the fixed navbar and applying the shared gutters.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let extra = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-20 px-4 pb-8 {extra}",
            {children}
        }
    )
}
