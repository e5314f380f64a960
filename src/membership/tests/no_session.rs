//! Tests toggling without an authenticated session.

use crate::membership::tests::{MockApi, TEST_EVENT_ID};
use crate::membership::{run_toggle, Membership, MembershipKind, MembershipToggle, ToggleOutcome};

/// Tests that a toggle with no session issues zero writes.
///
/// The caller is expected to surface a sign-in prompt; membership state must
/// be left untouched.
#[tokio::test]
async fn produces_no_writes_and_keeps_state() {
    let api = MockApi::empty();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(false);

    let outcome = run_toggle(
        &mut toggle,
        &api,
        None,
        MembershipKind::Attendance,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome, ToggleOutcome::SignInRequired);
    assert_eq!(toggle.membership(), Membership::NonMember);
    assert!(!toggle.busy());
    assert!(api.writes().is_empty());
}
