use serde::{Deserialize, Serialize};

/// A join-table row associating a user with an event.
///
/// The same shape backs both the `favorites` and `attendances` collections;
/// the backend enforces uniqueness of the pair per collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
    pub user_id: String,
    pub event_id: i64,
}
