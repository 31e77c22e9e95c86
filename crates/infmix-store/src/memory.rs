//! In-memory candidate store, loaded from a `Vec` or a JSON file.

use std::path::Path;

use async_trait::async_trait;
use infmix_core::CandidateProfile;

use crate::error::StoreError;
use crate::filters::CandidateFilters;
use crate::store::CandidateStore;

/// Fixed candidate list. Applies only the limit; filtering is left to
/// [`crate::retrieve`].
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    candidates: Vec<CandidateProfile>,
}

impl StaticStore {
    #[must_use]
    pub fn new(candidates: Vec<CandidateProfile>) -> Self {
        Self { candidates }
    }

    /// Load a JSON array of candidate profiles.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read, or
    /// [`StoreError::Deserialize`] if it is not a JSON array of profiles.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let candidates: Vec<CandidateProfile> =
            serde_json::from_str(&content).map_err(|e| StoreError::Deserialize {
                context: path.display().to_string(),
                source: e,
            })?;
        Ok(Self::new(candidates))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[async_trait]
impl CandidateStore for StaticStore {
    async fn query(
        &self,
        _filters: &CandidateFilters,
        limit: usize,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        Ok(self.candidates.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn from_json_file_reads_profiles() {
        let dir = std::env::temp_dir().join(format!("infmix-store-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pool.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"id": "a", "platform": "Instagram", "rateCard": {{"post": "250.00"}}}},
               {{"id": "b", "platform": "TikTok"}}]"#
        )
        .unwrap();

        let store = StaticStore::from_json_file(&path).unwrap();
        assert_eq!(store.len(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn from_json_file_reports_missing_file() {
        let err = StaticStore::from_json_file(Path::new("/nonexistent/pool.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn query_applies_limit_only() {
        let profile = |id: &str| CandidateProfile {
            id: id.to_string(),
            name: String::new(),
            handle: None,
            platform: "Instagram".to_string(),
            follower_count: 0,
            engagement_rate: 0.0,
            content_categories: vec![],
            locations: vec![],
            rate_card: infmix_core::RateCard::default(),
        };
        let store = StaticStore::new(vec![profile("a"), profile("b"), profile("c")]);
        let got = store
            .query(&CandidateFilters::default(), 2)
            .await
            .unwrap();
        let ids: Vec<_> = got.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
