/// Search endpoint used when `SHELFKIT_SERP_BASE_URL` is not set.
pub const DEFAULT_SERP_BASE_URL: &str =
    "https://api.dataforseo.com/v3/serp/google/organic/live/advanced";

/// Desktop browser identifier sent to product pages.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.82 Safari/537.36";

/// Process-level settings read from the environment.
///
/// Per-run behaviour (paths, stage toggles, keywords) lives in
/// [`crate::RunConfig`] instead.
#[derive(Clone)]
pub struct AppConfig {
    /// Full `Authorization` header value for the SERP API.
    pub serp_auth: Option<String>,
    pub serp_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Returns the SERP credential, or an error naming the variable to set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::MissingEnvVar`] when `SHELFKIT_SERP_AUTH`
    /// was not provided.
    pub fn require_serp_auth(&self) -> Result<&str, crate::ConfigError> {
        self.serp_auth
            .as_deref()
            .ok_or_else(|| crate::ConfigError::MissingEnvVar("SHELFKIT_SERP_AUTH".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("serp_auth", &self.serp_auth.as_ref().map(|_| "[redacted]"))
            .field("serp_base_url", &self.serp_base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
