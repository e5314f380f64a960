//! Tests outcome reporting used by views to refetch dependent rows.

use crate::membership::tests::{test_session, MockApi, TEST_EVENT_ID};
use crate::membership::{run_toggle, MembershipKind, MembershipToggle, ToggleOutcome};

/// Tests that only landed writes report a new membership.
///
/// The detail view refetches its attendee count off this value, so guarded
/// and failed toggles must report nothing.
#[test]
fn flipped_reports_only_landed_writes() {
    assert_eq!(ToggleOutcome::Toggled(true).flipped(), Some(true));
    assert_eq!(ToggleOutcome::Toggled(false).flipped(), Some(false));
    assert_eq!(ToggleOutcome::Failed.flipped(), None);
    assert_eq!(ToggleOutcome::AlreadyBusy.flipped(), None);
    assert_eq!(ToggleOutcome::SignInRequired.flipped(), None);
}

/// Tests that a landed attend toggle reports the membership it flipped to.
#[tokio::test]
async fn attend_toggle_reports_new_membership() {
    let api = MockApi::empty();
    let session = test_session();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(false);

    let outcome = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Attendance,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome.flipped(), Some(true));
}

/// Tests that a failed write reports nothing to refetch on.
#[tokio::test]
async fn failed_attend_toggle_reports_nothing() {
    let api = MockApi::failing();
    let session = test_session();
    let mut toggle = MembershipToggle::new();
    toggle.set_known(true);

    let outcome = run_toggle(
        &mut toggle,
        &api,
        Some(&session),
        MembershipKind::Attendance,
        TEST_EVENT_ID,
    )
    .await;

    assert_eq!(outcome.flipped(), None);
}
