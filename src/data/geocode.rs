//! Address lookups against a public Nominatim-style endpoint.
//!
//! One forward lookup (address text to coordinates) and one reverse lookup
//! (coordinates to a display address). No API key, no retry, no caching;
//! a miss is simply `None`.

use serde::Deserialize;

use crate::data::Config;

#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Deserialize)]
struct ReverseHit {
    display_name: String,
}

pub fn search_url(config: &Config, address: &str) -> String {
    format!(
        "{}/search?format=json&limit=1&q={}",
        config.geocode_url,
        urlencoding::encode(address)
    )
}

pub fn reverse_url(config: &Config, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/reverse?format=json&lat={}&lon={}",
        config.geocode_url, latitude, longitude
    )
}

/// Decodes a forward-lookup body into a coordinate pair.
///
/// The endpoint returns coordinates as strings; a hit that fails to parse as
/// a float is treated as a miss.
pub fn parse_forward(body: &str) -> Option<(f64, f64)> {
    let hits: Vec<SearchHit> = serde_json::from_str(body).ok()?;
    let hit = hits.into_iter().next()?;

    let latitude = hit.lat.parse().ok()?;
    let longitude = hit.lon.parse().ok()?;
    Some((latitude, longitude))
}

/// Decodes a reverse-lookup body into a display address.
pub fn parse_reverse(body: &str) -> Option<String> {
    let hit: ReverseHit = serde_json::from_str(body).ok()?;
    Some(hit.display_name)
}

#[cfg(feature = "web")]
pub use web::{forward, reverse};

#[cfg(feature = "web")]
mod web {
    use reqwasm::http::Request;

    use crate::data::{Config, DataError};

    /// Looks up coordinates for an address. `None` when nothing matched.
    pub async fn forward(config: &Config, address: &str) -> Result<Option<(f64, f64)>, DataError> {
        let body = get_text(&super::search_url(config, address)).await?;
        Ok(super::parse_forward(&body))
    }

    /// Looks up a display address for a coordinate pair.
    pub async fn reverse(
        config: &Config,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, DataError> {
        let body = get_text(&super::reverse_url(config, latitude, longitude)).await?;
        Ok(super::parse_reverse(&body))
    }

    async fn get_text(url: &str) -> Result<String, DataError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status()) {
            return Err(DataError::Status {
                code: response.status(),
                message: "geocoding request rejected".to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| DataError::Decode(e.to_string()))
    }
}
