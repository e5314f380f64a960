use dioxus::prelude::*;

use crate::client::{
    components::{layout::RequireGuest, layout::RequireSession, Navbar},
    routes::{
        Community, EventDetail, Events, Garage, Home, Login, MapView, NotFound, Profile,
        PublicProfile,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/map")]
    MapView {},

    #[route("/events")]
    Events {},

    #[route("/events/:id")]
    EventDetail { id: i64 },

    #[route("/community")]
    Community {},

    #[route("/profiles/:user_id")]
    PublicProfile { user_id: String },

    #[layout(RequireSession)]

    #[route("/garage")]
    Garage {},

    #[route("/profile")]
    Profile {},

    #[end_layout]

    #[layout(RequireGuest)]

    #[route("/login")]
    Login {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
