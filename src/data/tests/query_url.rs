//! Tests for the URL grammar produced by [`Query`].

use chrono::{TimeZone, Utc};

use crate::data::events;
use crate::data::rest::{Order, Query};
use crate::data::tests::test_config;
use crate::membership::{self, MembershipKind};
use crate::model::MembershipRow;

/// Tests a bare collection read with no parameters.
#[test]
fn bare_collection_has_no_query_string() {
    let url = Query::from("profiles").url(&test_config());
    assert_eq!(url, "https://backend.test/rest/v1/profiles");
}

/// Tests that equality filter values are percent-encoded.
#[test]
fn eq_filter_encodes_value() {
    let url = Query::from("profiles")
        .eq("username", "street racer")
        .url(&test_config());

    assert_eq!(
        url,
        "https://backend.test/rest/v1/profiles?username=eq.street%20racer"
    );
}

/// Tests the upcoming-events query: date floor, ascending order, limit.
///
/// The `gte` floor guarantees every returned event starts at or after the
/// fetch timestamp, and `starts_at.asc` guarantees pairwise ascending dates.
#[test]
fn upcoming_events_filters_and_orders_by_date() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 18, 0, 0).unwrap();
    let url = events::upcoming_query(now, 50).url(&test_config());

    assert_eq!(
        url,
        "https://backend.test/rest/v1/events\
         ?select=*, owner:profiles(id, username, avatar_url)\
         &starts_at=gte.2026-03-14T18%3A00%3A00%2B00%3A00\
         &order=starts_at.asc\
         &limit=50"
    );
}

/// Tests the id-list filter used to resolve favorites into event rows.
#[test]
fn in_list_renders_parenthesized_ids() {
    let url = events::by_ids_query(&[3, 14, 15]).url(&test_config());

    assert!(url.contains("id=in.(3,14,15)"));
    assert!(url.contains("order=starts_at.asc"));
}

/// Tests the membership pair check used on toggle mount.
#[test]
fn pair_query_filters_on_both_columns() {
    let row = MembershipRow {
        user_id: "user-1".to_string(),
        event_id: 7,
    };
    let url = membership::pair_query(MembershipKind::Favorite, &row).url(&test_config());

    assert_eq!(
        url,
        "https://backend.test/rest/v1/favorites\
         ?select=user_id, event_id\
         &user_id=eq.user-1\
         &event_id=eq.7"
    );
}

/// Tests that descending order renders with the `.desc` suffix.
#[test]
fn descending_order_uses_desc_suffix() {
    let url = Query::from("vehicles")
        .order("year", Order::Desc)
        .url(&test_config());

    assert_eq!(url, "https://backend.test/rest/v1/vehicles?order=year.desc");
}
