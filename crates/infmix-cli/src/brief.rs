use std::path::Path;

use infmix_core::Brief;

use crate::config::ConfigError;

/// Load and validate a campaign brief from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brief(path: &Path) -> Result<Brief, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BriefFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_brief(&content)
}

/// YAML is a superset of JSON, so one parser covers both formats.
fn parse_brief(content: &str) -> Result<Brief, ConfigError> {
    let brief: Brief = serde_yaml::from_str(content)?;
    brief.validate()?;
    Ok(brief)
}
