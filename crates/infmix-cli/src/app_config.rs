#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub firestore_url: String,
    pub firestore_project: Option<String>,
    pub firestore_collection: String,
    pub firestore_token: Option<String>,
    pub store_max_retries: u32,
    pub store_backoff_base_ms: u64,
    pub request_timeout_secs: u64,
    pub pool_limit: usize,
    pub gemini_api_key: Option<String>,
    pub gemini_url: String,
    pub gemini_model: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("firestore_url", &self.firestore_url)
            .field("firestore_project", &self.firestore_project)
            .field("firestore_collection", &self.firestore_collection)
            .field(
                "firestore_token",
                &self.firestore_token.as_ref().map(|_| "[redacted]"),
            )
            .field("store_max_retries", &self.store_max_retries)
            .field("store_backoff_base_ms", &self.store_backoff_base_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("pool_limit", &self.pool_limit)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_url", &self.gemini_url)
            .field("gemini_model", &self.gemini_model)
            .finish()
    }
}
