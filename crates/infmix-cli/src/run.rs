//! Command handlers. Each builds its collaborators from config, runs the
//! matcher, and prints JSON to stdout.

use std::path::Path;

use anyhow::Context;

use infmix_core::{budget_summary, BudgetSummary, EnrichedCandidate};
use infmix_enrich::{DisabledGenerator, GeminiGenerator, GeminiSettings, TextGenerator};
use infmix_matcher::{rank_pool, run_matching, MatchOptions};
use infmix_store::{CandidateStore, FirestoreSettings, FirestoreStore, StaticStore};
use serde::Serialize;

use crate::app_config::AppConfig;
use crate::brief::load_brief;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchReport {
    candidates: Vec<EnrichedCandidate>,
    budget: BudgetSummary,
}

/// Pick the candidate store: a local JSON pool when given, Firestore otherwise.
fn build_store(
    config: &AppConfig,
    pool: Option<&Path>,
) -> anyhow::Result<Box<dyn CandidateStore>> {
    if let Some(path) = pool {
        let store = StaticStore::from_json_file(path)
            .with_context(|| format!("loading candidate pool {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            candidates = store.len(),
            "using candidate pool file"
        );
        return Ok(Box::new(store));
    }

    let Some(project) = config.firestore_project.clone() else {
        anyhow::bail!("INFMIX_FIRESTORE_PROJECT must be set when --pool is not given");
    };
    let store = FirestoreStore::new(FirestoreSettings {
        base_url: config.firestore_url.clone(),
        project,
        collection: config.firestore_collection.clone(),
        token: config.firestore_token.clone(),
        timeout_secs: config.request_timeout_secs,
        max_retries: config.store_max_retries,
        backoff_base_ms: config.store_backoff_base_ms,
    })
    .context("building Firestore candidate store")?;
    Ok(Box::new(store))
}

fn build_generator(config: &AppConfig) -> anyhow::Result<Box<dyn TextGenerator>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        tracing::info!("GEMINI_API_KEY not set; rationales will use the template");
        return Ok(Box::new(DisabledGenerator));
    };
    let generator = GeminiGenerator::new(GeminiSettings {
        base_url: config.gemini_url.clone(),
        model: config.gemini_model.clone(),
        api_key,
        timeout_secs: config.request_timeout_secs,
    })
    .context("building Gemini text generator")?;
    Ok(Box::new(generator))
}

pub async fn run_match(
    config: &AppConfig,
    brief_path: &Path,
    pool: Option<&Path>,
) -> anyhow::Result<()> {
    let brief = load_brief(brief_path)
        .with_context(|| format!("loading brief {}", brief_path.display()))?;
    let store = build_store(config, pool)?;
    let generator = build_generator(config)?;
    let options = MatchOptions {
        pool_limit: config.pool_limit,
    };

    let candidates = run_matching(&brief, store.as_ref(), generator.as_ref(), options)
        .await
        .context("matching run failed")?;
    let budget = budget_summary(&candidates, brief.budget);
    if budget.over_budget {
        tracing::warn!(
            budget = %budget.budget,
            total_cost_estimate = %budget.total_cost_estimate,
            "estimated package cost exceeds the campaign budget"
        );
    }

    let report = MatchReport { candidates, budget };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub async fn run_rank(
    config: &AppConfig,
    brief_path: &Path,
    pool: Option<&Path>,
) -> anyhow::Result<()> {
    let brief = load_brief(brief_path)
        .with_context(|| format!("loading brief {}", brief_path.display()))?;
    let store = build_store(config, pool)?;
    let options = MatchOptions {
        pool_limit: config.pool_limit,
    };

    let ranked = rank_pool(&brief, store.as_ref(), options)
        .await
        .context("ranking run failed")?;
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(project: Option<&str>) -> AppConfig {
        AppConfig {
            log_level: "info".to_string(),
            firestore_url: "http://localhost:8080".to_string(),
            firestore_project: project.map(ToString::to_string),
            firestore_collection: "influencers".to_string(),
            firestore_token: None,
            store_max_retries: 0,
            store_backoff_base_ms: 0,
            request_timeout_secs: 5,
            pool_limit: 200,
            gemini_api_key: None,
            gemini_url: "http://localhost:8081".to_string(),
            gemini_model: "gemini-test".to_string(),
        }
    }

    #[test]
    fn missing_pool_file_error_names_the_path() {
        let pool = Path::new("/nonexistent/pool.json");
        let Err(err) = build_store(&config(None), Some(pool)) else {
            panic!("expected an error for a missing pool file");
        };
        let message = format!("{err:#}");
        assert!(
            message.contains("loading candidate pool /nonexistent/pool.json"),
            "got: {message}"
        );
    }

    #[test]
    fn firestore_requires_a_project() {
        let Err(err) = build_store(&config(None), None) else {
            panic!("expected an error without a project");
        };
        assert!(err.to_string().contains("INFMIX_FIRESTORE_PROJECT"));
    }

    #[test]
    fn firestore_store_is_built_from_config() {
        assert!(build_store(&config(Some("demo-project")), None).is_ok());
    }

    #[tokio::test]
    async fn missing_brief_error_names_the_path() {
        let err = run_rank(&config(None), Path::new("/nonexistent/brief.yaml"), None)
            .await
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(
            message.contains("loading brief /nonexistent/brief.yaml"),
            "got: {message}"
        );
    }
}
