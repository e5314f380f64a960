pub mod event;
pub mod membership;
pub mod profile;
pub mod vehicle;

pub use event::{Event, EventFilter, EventType};
pub use membership::MembershipRow;
pub use profile::Profile;
pub use vehicle::{FuelType, Vehicle};

#[cfg(test)]
mod tests;
