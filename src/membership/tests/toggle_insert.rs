//! Tests toggling a pair with no existing relationship row.

use crate::membership::tests::{test_row, test_session, MockApi, Write, TEST_EVENT_ID};
use crate::membership::{run_toggle, MembershipKind, MembershipToggle, ToggleOutcome};

/// Tests toggling a favorite that does not exist yet.
///
/// Verifies that exactly one insert is issued and the state flips to member.
#[tokio::test]
async fn issues_single_insert_and_flips_to_member() {
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
    assert!(toggle.is_member());
    assert!(!toggle.busy());
    assert_eq!(
        api.writes(),
        vec![Write::Insert(MembershipKind::Favorite, test_row())]
    );
}

/// Tests toggling before the mount-time check has landed.
///
/// Verifies that unknown membership plans an idempotent insert rather than
/// refusing to act.
#[tokio::test]
async fn unknown_membership_inserts() {
    let api = MockApi::empty();
    let session = test_session();
    let mut toggle = MembershipToggle::new();

    let outcome = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Attendance,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome, ToggleOutcome::Toggled(true));
    assert_eq!(
        api.writes(),
        vec![Write::Insert(MembershipKind::Attendance, test_row())]
    );
}
