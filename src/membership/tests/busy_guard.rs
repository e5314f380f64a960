//! Tests the in-flight guard against double submission.

use crate::membership::tests::{test_session, MockApi, TEST_EVENT_ID};
use crate::membership::{run_toggle, MembershipKind, MembershipToggle, ToggleAction, ToggleOutcome};

/// Tests that a toggle planned while another is in flight is rejected.
///
/// Verifies that the second trigger reaches neither insert nor delete.
#[tokio::test]
async fn second_trigger_while_busy_issues_no_write() {
    let api = MockApi::empty();
    let session = test_session();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(false);
    toggle.begin();

    assert_eq!(toggle.plan(Some(&session)), ToggleAction::Busy);

    let outcome = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Favorite,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome, ToggleOutcome::AlreadyBusy);
    assert!(api.writes().is_empty());
}

/// Tests that the guard clears once a toggle completes.
#[tokio::test]
async fn guard_clears_after_completion() {
    let api = MockApi::empty();
    let session = test_session();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(false);

    let outcome = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Favorite,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome, ToggleOutcome::Toggled(true));
    assert!(!toggle.busy());
    assert_eq!(toggle.plan(Some(&session)), ToggleAction::Delete);
}
