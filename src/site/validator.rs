//! Configuration validator.

use std::path::Path;

use tracing::{debug, info};

use crate::error::SiteCheckError;
use crate::lint::{LintDiagnostic, Location, RuleId, RuleRegistry, Severity, ValidationReport};

use super::document::SiteConfig;
use super::rules::{
    AccessibilityRule, DefensiveDefaultsRule, MenuWeightsRule, RequiredFieldsRule,
    SecurityAuditRule,
};

/// Report heading for configuration runs.
pub const CONFIG_REPORT_TITLE: &str = "Configuration validation";

impl RuleRegistry<SiteConfig> {
    /// Create a registry with all built-in configuration checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RequiredFieldsRule));
        registry.register(Box::new(SecurityAuditRule));
        registry.register(Box::new(DefensiveDefaultsRule));
        registry.register(Box::new(MenuWeightsRule));
        registry.register(Box::new(AccessibilityRule));
        registry
    }
}

/// Checks a site configuration document.
pub struct ConfigValidator {
    registry: RuleRegistry<SiteConfig>,
}

impl ConfigValidator {
    /// Create a validator with the built-in checks.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::<SiteConfig>::with_builtins(),
        }
    }

    /// The checks this validator runs.
    pub fn registry(&self) -> &RuleRegistry<SiteConfig> {
        &self.registry
    }

    /// Load and check the config at `path`.
    ///
    /// A missing or unparsable document produces a report with a single
    /// Error and no further checks.
    pub fn validate_path(&self, path: &Path) -> ValidationReport {
        info!(path = %path.display(), "validating site configuration");
        match SiteConfig::load(path) {
            Ok(config) => self.validate_document(&config),
            Err(err) => {
                debug!(error = %err, "config could not be loaded");
                let mut report = ValidationReport::new(CONFIG_REPORT_TITLE, path.display().to_string());
                report.push(load_failure(path, &err));
                report
            }
        }
    }

    /// Check an already parsed document.
    pub fn validate_document(&self, config: &SiteConfig) -> ValidationReport {
        let mut report =
            ValidationReport::new(CONFIG_REPORT_TITLE, config.path().display().to_string());
        report.extend(self.registry.run(config));
        report
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn load_failure(path: &Path, err: &SiteCheckError) -> LintDiagnostic {
    let diagnostic = LintDiagnostic::new(RuleId::new("config-load"), Severity::Error, err.to_string())
        .with_location(Location::file(path));
    match err {
        SiteCheckError::ConfigNotFound { .. } => {
            diagnostic.with_suggestion("Pass the config path explicitly or run from the site root")
        }
        _ => diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CLEAN: &str = r#"baseURL = "https://wiki.example.org/"
title = "Example Wiki"
languageCode = "en-us"
enableRobotsTXT = true
enableGitInfo = true

[params]
  externalLinkRel = "noopener noreferrer"

[outputs]
  home = ["HTML", "RSS", "JSON"]

[markup.goldmark.renderer]
  unsafe = false

[[menu.main]]
  identifier = "docs"
  weight = 10

[[menu.main]]
  identifier = "blog"
  weight = 20
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = RuleRegistry::<SiteConfig>::with_builtins();
        let ids: Vec<String> = registry.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(
            ids,
            [
                "required-fields",
                "security-audit",
                "defensive-defaults",
                "menu-weights",
                "accessibility"
            ]
        );
    }

    #[test]
    fn new_validator_uses_builtins() {
        let validator = ConfigValidator::new();
        assert_eq!(validator.registry().len(), 5);
        assert_eq!(
            validator.registry().iter().next().map(|r| r.id().to_string()),
            Some("required-fields".to_string())
        );
    }

    #[test]
    fn clean_config_has_no_issues() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.toml", CLEAN);

        let report = ConfigValidator::new().validate_path(&path);

        assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
        assert!(report.is_success_strict());
    }

    #[test]
    fn missing_file_is_single_error() {
        let temp = TempDir::new().unwrap();
        let report = ConfigValidator::new().validate_path(&temp.path().join("config.toml"));

        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].rule_id.as_str(), "config-load");
        assert!(!report.is_success());
    }

    #[test]
    fn unparsable_file_is_single_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.toml", "title = [unclosed");

        let report = ConfigValidator::new().validate_path(&path);

        assert_eq!(report.error_count(), 1);
        assert!(report.diagnostics[0].message.contains("Failed to parse"));
    }

    #[test]
    fn checks_all_run_despite_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.toml", "[markup.goldmark.renderer]\nunsafe = true\n");

        let report = ConfigValidator::new().validate_path(&path);

        // required fields + accessibility language
        assert_eq!(report.error_count(), 4);
        assert!(report.warning_count() >= 3);
        assert!(report.info_count() >= 1);
    }

    #[test]
    fn yaml_config_is_supported() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "hugo.yaml",
            "baseURL: https://x.org/\ntitle: X\nlanguageCode: en\n",
        );

        let report = ConfigValidator::new().validate_path(&path);
        assert!(report.is_success());
    }
}
