//! Accessibility configuration.

use serde_json::Value;

use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::site::SiteConfig;

const LANGUAGE_KEYS: &[&str] = &["languageCode", "defaultContentLanguage"];

/// Checks the site-wide language and search configuration.
pub struct AccessibilityRule;

impl AccessibilityRule {
    fn has_search(config: &SiteConfig) -> bool {
        if has_search_type(config.root()) {
            return true;
        }
        match config.get("outputs.home") {
            Some(Value::Array(formats)) => formats.iter().filter_map(Value::as_str).any(|f| {
                let f = f.to_lowercase();
                f == "json" || f.contains("search")
            }),
            _ => false,
        }
    }
}

/// Any table with `type = "search"`.
fn has_search_type(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.iter().any(|(k, v)| {
                k.eq_ignore_ascii_case("type")
                    && v.as_str().is_some_and(|s| s.eq_ignore_ascii_case("search"))
            }) || map.values().any(has_search_type)
        }
        Value::Array(items) => items.iter().any(has_search_type),
        _ => false,
    }
}

impl LintRule<SiteConfig> for AccessibilityRule {
    fn id(&self) -> RuleId {
        RuleId::new("accessibility")
    }

    fn name(&self) -> &str {
        "Accessibility"
    }

    fn description(&self) -> &str {
        "Requires a site language and advises on search"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, config: &SiteConfig) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        if !LANGUAGE_KEYS.iter().any(|key| config.has_value(key)) {
            diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    "No site language set - pages render without a lang attribute",
                )
                .with_location(Location::file(config.path()))
                .with_suggestion("Set languageCode (e.g. \"en-us\")"),
            );
        }

        if !Self::has_search(config) {
            diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    Severity::Info,
                    "No search output configured - site search improves accessibility",
                )
                .with_location(Location::file(config.path())),
            );
        }

        diagnostics
    }
}
