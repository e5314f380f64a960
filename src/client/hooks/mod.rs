pub mod membership;

pub use membership::{use_membership, MembershipHandle};
