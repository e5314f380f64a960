pub mod brand;
pub mod event_card;
pub mod event_form;
pub mod layout;
pub mod membership_button;
pub mod navbar;
pub mod page;
pub mod toast;
pub mod vehicle_form;

pub use brand::BrandLink;
pub use event_card::EventCard;
pub use membership_button::{AttendButton, FavoriteButton};
pub use navbar::Navbar;
pub use page::Page;
pub use toast::Toast;
