//! Tests for geocoding request URLs and response decoding.

use crate::data::geocode;
use crate::data::tests::test_config;

/// Tests that the forward-lookup URL percent-encodes the address.
#[test]
fn search_url_encodes_address() {
    let url = geocode::search_url(&test_config(), "Kurf\u{fc}rstendamm 1, Berlin");

    assert_eq!(
        url,
        "https://geocode.test/search?format=json&limit=1&q=Kurf%C3%BCrstendamm%201%2C%20Berlin"
    );
}

/// Tests decoding a forward lookup hit into a coordinate pair.
#[test]
fn parse_forward_reads_first_hit() {
    let body = r#"[{"lat": "52.5200", "lon": "13.4050", "display_name": "Berlin"}]"#;

    assert_eq!(geocode::parse_forward(body), Some((52.52, 13.405)));
}

/// Tests that an empty result set is a miss, not an error.
#[test]
fn parse_forward_empty_is_none() {
    assert_eq!(geocode::parse_forward("[]"), None);
}

/// Tests that unparseable coordinates are treated as a miss.
#[test]
fn parse_forward_bad_coordinates_is_none() {
    let body = r#"[{"lat": "fifty-two", "lon": "13.4050"}]"#;

    assert_eq!(geocode::parse_forward(body), None);
}

/// Tests decoding a reverse lookup into a display address.
#[test]
fn parse_reverse_reads_display_name() {
    let body = r#"{"display_name": "Nürburgring, Rhineland-Palatinate, Germany"}"#;

    assert_eq!(
        geocode::parse_reverse(body),
        Some("N\u{fc}rburgring, Rhineland-Palatinate, Germany".to_string())
    );
}
