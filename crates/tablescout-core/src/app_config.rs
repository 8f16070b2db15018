/// Application configuration loaded from the environment.
///
/// The Yelp key is optional at load time so that commands which never touch
/// the network can still run; the client constructor enforces its presence.
#[derive(Clone)]
pub struct AppConfig {
    pub yelp_api_key: Option<String>,
    pub log_level: String,
    pub search_timeout_secs: u64,
    pub reviews_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "yelp_api_key",
                &self.yelp_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("reviews_timeout_secs", &self.reviews_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
