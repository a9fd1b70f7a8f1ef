//! Policy file discovery and loading.

use crate::config::schema::Policy;
use crate::error::{Result, SiteCheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the project root, first match wins.
pub const POLICY_FILE_NAMES: &[&str] = &["sitecheck.yml", "sitecheck.yaml", ".sitecheck.yml"];

/// Find the policy file for a project root.
pub fn find_policy_file(project_root: &Path) -> Option<PathBuf> {
    POLICY_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Parse policy YAML. An empty document yields the defaults.
pub fn parse_policy(content: &str, path: &Path) -> Result<Policy> {
    if content.trim().is_empty() {
        return Ok(Policy::default());
    }
    serde_yaml::from_str(content).map_err(|e| SiteCheckError::PolicyParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the policy for a run.
///
/// An explicit path must exist. Without one, the project root is searched
/// and defaults are used when no file is found.
pub fn load_policy(project_root: &Path, explicit: Option<&Path>) -> Result<Policy> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_policy_file(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("no policy file in {}, using defaults", project_root.display());
                return Ok(Policy::default());
            }
        },
    };

    tracing::debug!("loading policy from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_policy(&content, &path)
}
