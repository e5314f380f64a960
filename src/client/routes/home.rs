use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaMapLocationDot, FaUserGroup};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Revmeet" }
        Meta {
            name: "description",
            content: "Find car meets near you, show off your garage, and meet other drivers."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl font-bold",
                        "Revmeet"
                    }
                    p {
                        "beta"
                    }
                }
                p { class: "text-center max-w-128",
                    "Find car meets, cruises, and track days near you. Favorite the ones you
                    like, tell the host you are coming, and show off what is in your garage."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link {
                            to: Route::MapView {},
                            button { class: "btn btn-primary w-48 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaMapLocationDot
                                }
                                p { "Event Map" }
                            }
                        }
                    }
                    li {
                        Link {
                            to: Route::Events {},
                            button { class: "btn btn-outline w-48 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaCalendar
                                }
                                p { "Upcoming Events" }
                            }
                        }
                    }
                    li {
                        Link {
                            to: Route::Community {},
                            button { class: "btn btn-outline w-48 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaUserGroup
                                }
                                p { "Community" }
                            }
                        }
                    }
                }
            }
        }
    )
}
