//! Favorite and attendance membership for events.
//!
//! Both relationships are join collections keyed by a (user, event) pair, and
//! both flip the same way: check once on mount, then insert or delete the
//! pair on demand. The flip is written idempotently — inserts ignore
//! duplicates and deletes filter on the exact pair — so a stale check cannot
//! corrupt the relationship, and a busy guard rejects a second toggle while a
//! call is still in flight.
//!
//! The state machine and driver are pure over the [`MembershipApi`] trait;
//! the REST implementation lives behind the `web` feature.

use crate::data::{auth::Session, DataError};
use crate::model::MembershipRow;

#[cfg(test)]
mod tests;

/// Which join collection a toggle operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipKind {
    Favorite,
    Attendance,
}

impl MembershipKind {
    pub fn collection(&self) -> &'static str {
        match self {
            MembershipKind::Favorite => "favorites",
            MembershipKind::Attendance => "attendances",
        }
    }
}

/// Membership as last observed from the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Membership {
    /// The mount-time check has not completed yet.
    #[default]
    Unknown,
    Member,
    NonMember,
}

/// What a toggle request should do, given the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// No session: reject without touching the network.
    SignInRequired,
    /// A previous toggle is still in flight.
    Busy,
    Insert,
    Delete,
}

/// Result of driving one toggle to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    SignInRequired,
    AlreadyBusy,
    /// The write succeeded; the flag is the new membership.
    Toggled(bool),
    /// The write failed; membership is unchanged.
    Failed,
}

impl ToggleOutcome {
    /// The new membership when a write landed, `None` otherwise.
    ///
    /// Views refetch dependent rows (an event's attendee count) off this
    /// value, so guarded and failed toggles must report nothing.
    pub fn flipped(self) -> Option<bool> {
        match self {
            ToggleOutcome::Toggled(is_member) => Some(is_member),
            _ => None,
        }
    }
}

/// Per-item toggle state: observed membership plus an in-flight guard.
///
/// The guard is checked by [`plan`](Self::plan) itself, not merely exposed
/// for the UI to disable a button, so two rapid triggers cannot both reach
/// the network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MembershipToggle {
    membership: Membership,
    busy: bool,
}

impl MembershipToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of the mount-time membership check.
    pub fn set_known(&mut self, is_member: bool) {
        self.membership = if is_member {
            Membership::Member
        } else {
            Membership::NonMember
        };
    }

    pub fn membership(&self) -> Membership {
        self.membership
    }

    pub fn is_member(&self) -> bool {
        self.membership == Membership::Member
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Decides what a toggle request should do right now.
    ///
    /// `Unknown` membership plans an insert: the only way to be unknown is a
    /// check that has not landed, and the insert is idempotent either way.
    pub fn plan(&self, session: Option<&Session>) -> ToggleAction {
        if session.is_none() {
            return ToggleAction::SignInRequired;
        }
        if self.busy {
            return ToggleAction::Busy;
        }
        match self.membership {
            Membership::Member => ToggleAction::Delete,
            Membership::NonMember | Membership::Unknown => ToggleAction::Insert,
        }
    }

    /// Marks a call in flight. Exposed to the crate so the embedding hook can
    /// reflect the guard in UI state before awaiting the write.
    pub(crate) fn begin(&mut self) {
        self.busy = true;
    }

    fn finish(&mut self, flipped_to_member: Option<bool>) {
        self.busy = false;
        if let Some(is_member) = flipped_to_member {
            self.set_known(is_member);
        }
    }
}

/// Backend operations a toggle needs. Implemented over REST for the app and
/// by a recording mock in tests.
#[allow(async_fn_in_trait)]
pub trait MembershipApi {
    /// Whether a row exists for the pair.
    async fn check(&self, kind: MembershipKind, row: &MembershipRow) -> Result<bool, DataError>;
    /// Creates the pair, ignoring an already-existing row.
    async fn insert(&self, kind: MembershipKind, row: &MembershipRow) -> Result<(), DataError>;
    /// Removes the pair; removing an absent pair succeeds.
    async fn delete(&self, kind: MembershipKind, row: &MembershipRow) -> Result<(), DataError>;
}

/// Drives one toggle: plan, write, flip.
///
/// On a write error the membership is left unchanged and the caller only
/// learns that nothing was toggled, matching the view-level error policy.
pub async fn run_toggle<A: MembershipApi>(
    toggle: &mut MembershipToggle,
    api: &A,
    session: Option<&Session>,
    kind: MembershipKind,
    event_id: i64,
) -> ToggleOutcome {
    let action = toggle.plan(session);

    let (session, is_delete) = match (action, session) {
        (ToggleAction::SignInRequired, _) => return ToggleOutcome::SignInRequired,
        (ToggleAction::Busy, _) => return ToggleOutcome::AlreadyBusy,
        (ToggleAction::Insert, Some(session)) => (session, false),
        (ToggleAction::Delete, Some(session)) => (session, true),
        // plan() only returns Insert/Delete when a session is present.
        (_, None) => return ToggleOutcome::SignInRequired,
    };

    let row = MembershipRow {
        user_id: session.user.id.clone(),
        event_id,
    };

    toggle.begin();
    let result = if is_delete {
        api.delete(kind, &row).await
    } else {
        api.insert(kind, &row).await
    };

    match result {
        Ok(()) => {
            toggle.finish(Some(!is_delete));
            ToggleOutcome::Toggled(!is_delete)
        }
        Err(_) => {
            toggle.finish(None);
            ToggleOutcome::Failed
        }
    }
}

/// Query for the mount-time membership check of one pair.
pub fn pair_query(kind: MembershipKind, row: &MembershipRow) -> crate::data::rest::Query {
    crate::data::rest::Query::from(kind.collection())
        .select("user_id, event_id")
        .eq("user_id", &row.user_id)
        .eq("event_id", row.event_id)
}

/// Query for every membership row of one user, used to resolve favorite
/// event ids on the profile view.
pub fn by_user_query(kind: MembershipKind, user_id: &str) -> crate::data::rest::Query {
    crate::data::rest::Query::from(kind.collection())
        .select("user_id, event_id")
        .eq("user_id", user_id)
}

/// Query for every membership row of one event, used for attendee counts.
pub fn by_event_query(kind: MembershipKind, event_id: i64) -> crate::data::rest::Query {
    crate::data::rest::Query::from(kind.collection())
        .select("user_id, event_id")
        .eq("event_id", event_id)
}

#[cfg(feature = "web")]
pub use rest_api::RestMembershipApi;

#[cfg(feature = "web")]
mod rest_api {
    use super::{MembershipApi, MembershipKind};
    use crate::data::rest::{self, OnConflict};
    use crate::data::{auth::Session, Config, DataError};
    use crate::model::MembershipRow;

    /// [`MembershipApi`] over the PostgREST-style data endpoint.
    pub struct RestMembershipApi {
        config: Config,
        session: Session,
    }

    impl RestMembershipApi {
        pub fn new(config: Config, session: Session) -> Self {
            Self { config, session }
        }
    }

    impl MembershipApi for RestMembershipApi {
        async fn check(
            &self,
            kind: MembershipKind,
            row: &MembershipRow,
        ) -> Result<bool, DataError> {
            let query = super::pair_query(kind, row);
            let rows: Vec<MembershipRow> =
                rest::fetch_rows(&self.config, Some(&self.session), &query).await?;
            Ok(!rows.is_empty())
        }

        async fn insert(
            &self,
            kind: MembershipKind,
            row: &MembershipRow,
        ) -> Result<(), DataError> {
            rest::insert_row(
                &self.config,
                &self.session,
                kind.collection(),
                row,
                OnConflict::Ignore,
            )
            .await
        }

        async fn delete(
            &self,
            kind: MembershipKind,
            row: &MembershipRow,
        ) -> Result<(), DataError> {
            let query = crate::data::rest::Query::from(kind.collection())
                .eq("user_id", &row.user_id)
                .eq("event_id", row.event_id);
            rest::delete_rows(&self.config, &self.session, &query).await
        }
    }
}
