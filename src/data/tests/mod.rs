//! Tests for query construction and response decoding.

mod geocode_parse;
mod object_path;
mod query_url;

use crate::data::Config;

pub fn test_config() -> Config {
    Config {
        backend_url: "https://backend.test".to_string(),
        anon_key: "anon".to_string(),
        avatar_bucket: "avatars".to_string(),
        tile_url: "https://tiles.test/{z}/{x}/{y}.png".to_string(),
        geocode_url: "https://geocode.test".to_string(),
    }
}
