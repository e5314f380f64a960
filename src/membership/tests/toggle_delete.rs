//! Tests toggling a pair whose relationship row already exists.

use crate::membership::tests::{test_row, test_session, MockApi, Write, TEST_EVENT_ID};
use crate::membership::{run_toggle, MembershipKind, MembershipToggle, ToggleOutcome};

/// Tests toggling an existing favorite off.
///
/// Verifies that exactly one delete filtered by the (user, event) pair is
/// issued and the state flips to non-member.
#[tokio::test]
async fn issues_single_delete_and_flips_to_non_member() {
    let api = MockApi::with_row(MembershipKind::Favorite, test_row());
    let session = test_session();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(true);

    let outcome = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Favorite,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome, ToggleOutcome::Toggled(false));
    assert!(!toggle.is_member());
    assert!(!toggle.busy());
    assert_eq!(
        api.writes(),
        vec![Write::Delete(MembershipKind::Favorite, test_row())]
    );
}

/// Tests that deleting an already-absent pair still succeeds.
///
/// The delete is filtered by the exact pair, so a stale member state cannot
/// produce an error when the row is already gone.
#[tokio::test]
async fn delete_of_absent_pair_succeeds() {
    let api = MockApi::empty();
    let session = test_session();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(true);

    let outcome = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Favorite,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome, ToggleOutcome::Toggled(false));
    assert!(!toggle.is_member());
}
