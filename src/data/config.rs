/// Endpoint configuration baked in at build time.
///
/// The client ships as static WASM, so configuration comes from compile-time
/// environment variables rather than a runtime environment file. Defaults
/// point at the demo project so a plain `dx serve` works out of the box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend project, without a trailing slash.
    pub backend_url: String,
    /// Anonymous API key sent with every request.
    pub anon_key: String,
    /// Storage bucket holding avatar images.
    pub avatar_bucket: String,
    /// Tile server URL template handed to the map widget.
    pub tile_url: String,
    /// Base URL of the public geocoding endpoint.
    pub geocode_url: String,
}

impl Config {
    pub fn from_build_env() -> Self {
        Self {
            backend_url: option_env!("REVMEET_BACKEND_URL")
                .unwrap_or("https://revmeet-demo.supabase.co")
                .trim_end_matches('/')
                .to_string(),
            anon_key: option_env!("REVMEET_ANON_KEY")
                .unwrap_or("public-anon-key")
                .to_string(),
            avatar_bucket: option_env!("REVMEET_AVATAR_BUCKET")
                .unwrap_or("avatars")
                .to_string(),
            tile_url: option_env!("REVMEET_TILE_URL")
                .unwrap_or("https://tile.openstreetmap.org/{z}/{x}/{y}.png")
                .to_string(),
            geocode_url: option_env!("REVMEET_GEOCODE_URL")
                .unwrap_or("https://nominatim.openstreetmap.org")
                .trim_end_matches('/')
                .to_string(),
        }
    }
}
