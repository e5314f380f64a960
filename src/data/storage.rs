//! Avatar uploads to the backend's storage buckets.
//!
//! Uploads land under a random object name so a re-upload never overwrites a
//! URL already referenced by a profile row. Superseded objects are not
//! deleted; profile rows simply point at the newest URL.

use crate::data::Config;

/// Builds a unique object path from the original file name, keeping its
/// extension so the bucket serves a sensible content type.
pub fn object_path(user_id: &str, original_name: &str) -> String {
    let extension = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or("bin");

    format!("{}/{:032x}.{}", user_id, rand::random::<u128>(), extension)
}

/// Public URL under which an uploaded object is served.
pub fn public_url(config: &Config, bucket: &str, path: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        config.backend_url, bucket, path
    )
}

#[cfg(feature = "web")]
pub use web::upload;

#[cfg(feature = "web")]
mod web {
    use js_sys::Uint8Array;
    use reqwasm::http::Request;

    use crate::data::{auth::Session, Config, DataError};

    /// Uploads a file to the bucket and returns its public URL.
    pub async fn upload(
        config: &Config,
        session: &Session,
        bucket: &str,
        path: &str,
        bytes: &[u8],
    ) -> Result<String, DataError> {
        let url = format!("{}/storage/v1/object/{}/{}", config.backend_url, bucket, path);
        let body = Uint8Array::from(bytes);

        let response = Request::post(&url)
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .body(body)
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if !(200..300).contains(&response.status()) {
            return Err(DataError::Status {
                code: response.status(),
                message: "upload rejected".to_string(),
            });
        }

        Ok(super::public_url(config, bucket, path))
    }
}
