//! Candidate store backed by the Firestore REST API.
//!
//! Issues a `runQuery` against one collection. Only the platform filter is
//! pushed down (as an `IN` filter); everything else is re-checked by
//! [`crate::retrieve`].

mod value;

use std::time::Duration;

use async_trait::async_trait;
use infmix_core::CandidateProfile;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::StoreError;
use crate::filters::CandidateFilters;
use crate::retry::RetryPolicy;
use crate::store::CandidateStore;

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_COLLECTION: &str = "influencers";

/// Firestore caps the number of values in an `IN` filter.
const MAX_IN_VALUES: usize = 30;

/// Connection settings for [`FirestoreStore`].
#[derive(Clone)]
pub struct FirestoreSettings {
    pub base_url: String,
    pub project: String,
    pub collection: String,
    /// OAuth bearer token. `None` for emulators and public rules.
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl std::fmt::Debug for FirestoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreSettings")
            .field("base_url", &self.base_url)
            .field("project", &self.project)
            .field("collection", &self.collection)
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct RunQueryItem {
    #[serde(default)]
    document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

pub struct FirestoreStore {
    client: Client,
    url: String,
    collection: String,
    token: Option<String>,
    retry: RetryPolicy,
}

impl FirestoreStore {
    /// Build a store client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the project or collection is empty,
    /// or [`StoreError::Http`] if the HTTP client cannot be constructed.
    pub fn new(settings: FirestoreSettings) -> Result<Self, StoreError> {
        if settings.project.trim().is_empty() {
            return Err(StoreError::Config("Firestore project is empty".to_string()));
        }
        if settings.collection.trim().is_empty() {
            return Err(StoreError::Config(
                "Firestore collection is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("infmix/0.1 (candidate-retrieval)")
            .build()?;

        let url = format!(
            "{}/v1/projects/{}/databases/(default)/documents:runQuery",
            settings.base_url.trim_end_matches('/'),
            settings.project.trim()
        );

        Ok(Self {
            client,
            url,
            collection: settings.collection.trim().to_string(),
            token: settings.token,
            retry: RetryPolicy {
                max_retries: settings.max_retries,
                backoff_base_ms: settings.backoff_base_ms,
            },
        })
    }

    async fn run_query_once(&self, body: &Value) -> Result<Vec<RunQueryItem>, StoreError> {
        let mut request = self.client.post(&self.url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| StoreError::Deserialize {
            context: format!("runQuery({})", self.collection),
            source: e,
        })
    }
}

#[async_trait]
impl CandidateStore for FirestoreStore {
    async fn query(
        &self,
        filters: &CandidateFilters,
        limit: usize,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        let body = build_run_query(&self.collection, filters, limit);
        let items = self
            .retry
            .run(&self.collection, || self.run_query_once(&body))
            .await?;

        let mut profiles = Vec::with_capacity(items.len());
        for document in items.into_iter().filter_map(|item| item.document) {
            match decode_document(&document) {
                Ok(profile) => profiles.push(profile),
                Err(e) => {
                    tracing::warn!(
                        document = %document.name,
                        error = %e,
                        "skipping undecodable candidate document"
                    );
                }
            }
        }
        profiles.truncate(limit);

        tracing::debug!(
            collection = %self.collection,
            count = profiles.len(),
            "Firestore candidates fetched"
        );
        Ok(profiles)
    }
}

/// Build the `runQuery` request body.
fn build_run_query(collection: &str, filters: &CandidateFilters, limit: usize) -> Value {
    let mut query = json!({
        "from": [{ "collectionId": collection }],
        "limit": i32::try_from(limit).unwrap_or(i32::MAX),
    });

    let platforms: Vec<&str> = filters
        .platforms
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if !platforms.is_empty() && platforms.len() <= MAX_IN_VALUES {
        let values: Vec<Value> = platforms
            .iter()
            .map(|p| json!({ "stringValue": p }))
            .collect();
        query["where"] = json!({
            "fieldFilter": {
                "field": { "fieldPath": "platform" },
                "op": "IN",
                "value": { "arrayValue": { "values": values } }
            }
        });
    }

    json!({ "structuredQuery": query })
}

/// Decode one document, taking the id from the document name when the
/// fields carry none.
fn decode_document(document: &Document) -> Result<CandidateProfile, serde_json::Error> {
    let mut decoded = value::decode_fields(&document.fields);
    if let Value::Object(map) = &mut decoded {
        if !map.get("id").is_some_and(Value::is_string) {
            let id = document
                .name
                .rsplit('/')
                .next()
                .unwrap_or(&document.name)
                .to_string();
            map.insert("id".to_string(), Value::String(id));
        }
    }
    serde_json::from_value(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(platforms: &[&str]) -> CandidateFilters {
        CandidateFilters {
            platforms: platforms.iter().map(ToString::to_string).collect(),
            ..CandidateFilters::default()
        }
    }

    #[test]
    fn query_pushes_platforms_down_as_in_filter() {
        let body = build_run_query("influencers", &filters(&["Instagram", " TikTok "]), 200);
        let q = &body["structuredQuery"];
        assert_eq!(q["from"][0]["collectionId"], "influencers");
        assert_eq!(q["limit"], 200);
        assert_eq!(q["where"]["fieldFilter"]["op"], "IN");
        assert_eq!(
            q["where"]["fieldFilter"]["value"]["arrayValue"]["values"][1]["stringValue"],
            "TikTok"
        );
    }

    #[test]
    fn query_without_platforms_has_no_where_clause() {
        let body = build_run_query("influencers", &filters(&[]), 10);
        assert!(body["structuredQuery"].get("where").is_none());
    }

    #[test]
    fn query_skips_in_filter_beyond_firestore_cap() {
        let many: Vec<String> = (0..=MAX_IN_VALUES).map(|i| format!("p{i}")).collect();
        let f = CandidateFilters {
            platforms: many,
            ..CandidateFilters::default()
        };
        let body = build_run_query("influencers", &f, 10);
        assert!(body["structuredQuery"].get("where").is_none());
    }

    #[test]
    fn document_id_comes_from_name() {
        let document: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/influencers/abc123",
            "fields": {
                "platform": {"stringValue": "Instagram"},
                "followerCount": {"integerValue": "42000"}
            }
        }))
        .unwrap();
        let profile = decode_document(&document).unwrap();
        assert_eq!(profile.id, "abc123");
        assert_eq!(profile.follower_count, 42_000);
    }

    #[test]
    fn explicit_id_field_wins() {
        let document: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/influencers/abc123",
            "fields": {
                "id": {"stringValue": "creator-7"},
                "platform": {"stringValue": "Instagram"}
            }
        }))
        .unwrap();
        assert_eq!(decode_document(&document).unwrap().id, "creator-7");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let document: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/influencers/n1",
            "fields": {
                "name": {"nullValue": null},
                "platform": {"stringValue": "Instagram"},
                "engagementRate": {"nullValue": null},
                "rateCard": {"mapValue": {"fields": {
                    "post": {"integerValue": "500"},
                    "story": {"nullValue": null}
                }}}
            }
        }))
        .unwrap();
        let profile = decode_document(&document).expect("null fields should not fail decoding");
        assert_eq!(profile.id, "n1");
        assert_eq!(profile.name, "");
        assert!(profile.engagement_rate.abs() < f64::EPSILON);
        assert_eq!(profile.rate_card.post, rust_decimal::Decimal::from(500));
        assert_eq!(profile.rate_card.story, rust_decimal::Decimal::ZERO);
    }

    #[test]
    fn new_rejects_empty_project() {
        let settings = FirestoreSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            project: "  ".to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            token: None,
            timeout_secs: 5,
            max_retries: 0,
            backoff_base_ms: 0,
        };
        assert!(matches!(
            FirestoreStore::new(settings),
            Err(StoreError::Config(_))
        ));
    }

    #[test]
    fn settings_debug_redacts_token() {
        let settings = FirestoreSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            project: "demo".to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            token: Some("secret-token".to_string()),
            timeout_secs: 5,
            max_retries: 0,
            backoff_base_ms: 0,
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[redacted]"));
    }
}
