//! Tests for the toggle planning rules.

use crate::membership::tests::test_session;
use crate::membership::{MembershipToggle, ToggleAction};

/// Tests that a missing session always wins over every other state.
#[test]
fn missing_session_rejects_even_when_busy() {
    let mut toggle = MembershipToggle::new();
    toggle.set_known(true);
    toggle.begin();

    assert_eq!(toggle.plan(None), ToggleAction::SignInRequired);
}

/// Tests that known membership plans the inverse write.
#[test]
fn member_plans_delete_non_member_plans_insert() {
    let session = test_session();

    let mut toggle = MembershipToggle::new();
    toggle.set_known(true);
    assert_eq!(toggle.plan(Some(&session)), ToggleAction::Delete);

    toggle.set_known(false);
    assert_eq!(toggle.plan(Some(&session)), ToggleAction::Insert);
}

/// Tests that unknown membership plans an insert.
#[test]
fn unknown_plans_insert() {
    let session = test_session();
    let toggle = MembershipToggle::new();

    assert_eq!(toggle.plan(Some(&session)), ToggleAction::Insert);
}
