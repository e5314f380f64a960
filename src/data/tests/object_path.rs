//! Tests for storage object naming.

use crate::data::storage;
use crate::data::tests::test_config;

/// Tests that uploads keep the original extension under a random name.
#[test]
fn keeps_extension_and_user_prefix() {
    let path = storage::object_path("user-1", "my car.JPG");

    assert!(path.starts_with("user-1/"));
    assert!(path.ends_with(".JPG"));
}

/// Tests that two uploads of the same file never collide.
#[test]
fn successive_names_differ() {
    let first = storage::object_path("user-1", "avatar.png");
    let second = storage::object_path("user-1", "avatar.png");

    assert_ne!(first, second);
}

/// Tests that a missing or suspicious extension falls back to `bin`.
#[test]
fn falls_back_to_bin_extension() {
    assert!(storage::object_path("user-1", "avatar").ends_with(".bin"));
    assert!(storage::object_path("user-1", "avatar.").ends_with(".bin"));
    assert!(storage::object_path("user-1", "weird.p/ng").ends_with(".bin"));
}

/// Tests the public URL shape for a served object.
#[test]
fn public_url_points_into_bucket() {
    let url = storage::public_url(&test_config(), "avatars", "user-1/abc.png");

    assert_eq!(
        url,
        "https://backend.test/storage/v1/object/public/avatars/user-1/abc.png"
    );
}
