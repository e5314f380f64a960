pub mod app;
pub mod components;
pub mod hooks;
#[cfg(feature = "web")]
pub mod leaflet;
pub mod router;
pub mod routes;
pub mod store;

pub use app::App;
