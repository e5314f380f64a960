//! Tests two sequential toggles on the same pair.

use crate::membership::tests::{test_row, test_session, MockApi, Write, TEST_EVENT_ID};
use crate::membership::{run_toggle, Membership, MembershipKind, MembershipToggle, ToggleOutcome};

/// Tests toggling a favorite twice, awaiting each toggle.
///
/// Verifies that exactly one insert and one delete are issued, in that
/// order, and the final state equals the initial state.
#[tokio::test]
async fn returns_to_initial_state_with_one_insert_one_delete() {
    let api = MockApi::empty();
    let session = test_session();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(false);

    let first = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Favorite,
        TEST_EVENT_ID,
    )
    .await;
    let second = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Favorite,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(first, ToggleOutcome::Toggled(true));
    assert_eq!(second, ToggleOutcome::Toggled(false));
    assert_eq!(toggle.membership(), Membership::NonMember);
    assert_eq!(
        api.writes(),
        vec![
            Write::Insert(MembershipKind::Favorite, test_row()),
            Write::Delete(MembershipKind::Favorite, test_row()),
        ]
    );
}
