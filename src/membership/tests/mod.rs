//! Tests for the membership toggle state machine and driver.

mod busy_guard;
mod double_toggle;
mod failed_write;
mod no_session;
mod outcome;
mod plan;
mod toggle_delete;
mod toggle_insert;

use std::cell::RefCell;

use crate::data::{
    auth::{AuthUser, Session},
    DataError,
};
use crate::membership::{MembershipApi, MembershipKind};
use crate::model::MembershipRow;

pub const TEST_USER_ID: &str = "9f3c7a52-0000-4000-8000-demo";
pub const TEST_EVENT_ID: i64 = 42;

/// A write observed by the mock, in issue order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Write {
    Insert(MembershipKind, MembershipRow),
    Delete(MembershipKind, MembershipRow),
}

/// In-memory [`MembershipApi`] recording every write it receives.
pub struct MockApi {
    rows: RefCell<Vec<(MembershipKind, MembershipRow)>>,
    writes: RefCell<Vec<Write>>,
    fail_writes: bool,
}

impl MockApi {
    pub fn empty() -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            writes: RefCell::new(Vec::new()),
            fail_writes: false,
        }
    }

    /// Mock pre-seeded with an existing (user, event) row.
    pub fn with_row(kind: MembershipKind, row: MembershipRow) -> Self {
        let api = Self::empty();
        api.rows.borrow_mut().push((kind, row));
        api
    }

    /// Mock whose writes all fail with a transport error.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::empty()
        }
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.borrow().clone()
    }
}

impl MembershipApi for MockApi {
    async fn check(&self, kind: MembershipKind, row: &MembershipRow) -> Result<bool, DataError> {
        Ok(self
            .rows
            .borrow()
            .iter()
            .any(|(k, r)| *k == kind && r == row))
    }

    async fn insert(&self, kind: MembershipKind, row: &MembershipRow) -> Result<(), DataError> {
        if self.fail_writes {
            return Err(DataError::Http("connection reset".to_string()));
        }
        self.writes
            .borrow_mut()
            .push(Write::Insert(kind, row.clone()));

        let mut rows = self.rows.borrow_mut();
        if !rows.iter().any(|(k, r)| *k == kind && r == row) {
            rows.push((kind, row.clone()));
        }
        Ok(())
    }

    async fn delete(&self, kind: MembershipKind, row: &MembershipRow) -> Result<(), DataError> {
        if self.fail_writes {
            return Err(DataError::Http("connection reset".to_string()));
        }
        self.writes
            .borrow_mut()
            .push(Write::Delete(kind, row.clone()));

        self.rows
            .borrow_mut()
            .retain(|(k, r)| !(*k == kind && r == row));
        Ok(())
    }
}

pub fn test_session() -> Session {
    Session {
        access_token: "test-token".to_string(),
        user: AuthUser {
            id: TEST_USER_ID.to_string(),
            email: "driver@example.com".to_string(),
        },
    }
}

pub fn test_row() -> MembershipRow {
    MembershipRow {
        user_id: TEST_USER_ID.to_string(),
        event_id: TEST_EVENT_ID,
    }
}
