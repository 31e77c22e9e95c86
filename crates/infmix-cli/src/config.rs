use thiserror::Error;

use infmix_enrich::gemini;
use infmix_store::{firestore, DEFAULT_POOL_LIMIT};

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brief file {path}: {source}")]
    BriefFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brief file: {0}")]
    BriefFileParse(#[from] serde_yaml::Error),

    #[error(transparent)]
    InvalidBrief(#[from] infmix_core::CoreError),
}

/// Load configuration from the process environment after reading `.env`.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup, so tests can pass a plain map.
///
/// Every variable has a default or is optional; blank optional values count
/// as unset.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("INFMIX_LOG_LEVEL", "info");

    let firestore_url = or_default("INFMIX_FIRESTORE_URL", firestore::DEFAULT_BASE_URL);
    let firestore_project = optional("INFMIX_FIRESTORE_PROJECT");
    let firestore_collection =
        or_default("INFMIX_FIRESTORE_COLLECTION", firestore::DEFAULT_COLLECTION);
    let firestore_token = optional("INFMIX_FIRESTORE_TOKEN");
    let store_max_retries = parse_u32("INFMIX_STORE_MAX_RETRIES", "3")?;
    let store_backoff_base_ms = parse_u64("INFMIX_STORE_BACKOFF_BASE_MS", "1000")?;
    let request_timeout_secs = parse_u64("INFMIX_REQUEST_TIMEOUT_SECS", "30")?;

    let pool_limit = or_default("INFMIX_POOL_LIMIT", &DEFAULT_POOL_LIMIT.to_string())
        .trim()
        .parse::<usize>()
        .map_err(|e| e.to_string())
        .and_then(|n| {
            if n == 0 {
                Err("must be at least 1".to_string())
            } else {
                Ok(n)
            }
        })
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "INFMIX_POOL_LIMIT".to_string(),
            reason,
        })?;

    let gemini_api_key = optional("GEMINI_API_KEY");
    let gemini_url = or_default("INFMIX_GEMINI_URL", gemini::DEFAULT_BASE_URL);
    let gemini_model = or_default("INFMIX_GEMINI_MODEL", gemini::DEFAULT_MODEL);

    Ok(AppConfig {
        log_level,
        firestore_url,
        firestore_project,
        firestore_collection,
        firestore_token,
        store_max_retries,
        store_backoff_base_ms,
        request_timeout_secs,
        pool_limit,
        gemini_api_key,
        gemini_url,
        gemini_model,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
