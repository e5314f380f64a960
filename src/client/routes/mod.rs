pub mod community;
pub mod event_detail;
pub mod events;
pub mod garage;
pub mod home;
pub mod login;
pub mod map;
pub mod not_found;
pub mod profile;
pub mod public_profile;

pub use community::Community;
pub use event_detail::EventDetail;
pub use events::Events;
pub use garage::Garage;
pub use home::Home;
pub use login::Login;
pub use map::MapView;
pub use not_found::NotFound;
pub use profile::Profile;
pub use public_profile::PublicProfile;
