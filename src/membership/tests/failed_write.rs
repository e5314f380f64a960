//! Tests error handling when the backend rejects a toggle write.

use crate::membership::tests::{test_session, MockApi, TEST_EVENT_ID};
use crate::membership::{run_toggle, Membership, MembershipKind, MembershipToggle, ToggleOutcome};

/// Tests that a failed write leaves membership unchanged.
///
/// The error is swallowed at this layer; the caller only observes that the
/// state did not flip and the guard was released.
#[tokio::test]
async fn keeps_membership_and_releases_guard() {
    let api = MockApi::failing();
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

    assert_eq!(outcome, ToggleOutcome::Failed);
    assert_eq!(toggle.membership(), Membership::NonMember);
    assert!(!toggle.busy());
}
