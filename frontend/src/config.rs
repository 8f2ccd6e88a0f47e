pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Trunk (dev) and nginx (prod) both proxy /api/ to the tournament
        // service, so relative URLs are the default. Set API_BASE_URL at
        // build time to talk to a service on another origin.
        option_env!("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }

    /// How long a toast stays up, in milliseconds
    pub fn toast_duration_ms() -> u32 {
        option_env!("TOAST_DURATION_MS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000)
    }
}
