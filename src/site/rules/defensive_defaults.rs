//! Defensive defaults.
//!
//! robots.txt generation and git metadata should be switched on. Their
//! absence does not break the build, so this rule only warns.

use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::site::SiteConfig;

const DEFAULTS: &[(&str, &str)] = &[
    ("enableRobotsTXT", "Robots.txt should be enabled for SEO control"),
    ("enableGitInfo", "Git info provides useful metadata for debugging"),
];

/// Checks that recommended generator flags are enabled.
pub struct DefensiveDefaultsRule;

impl LintRule<SiteConfig> for DefensiveDefaultsRule {
    fn id(&self) -> RuleId {
        RuleId::new("defensive-defaults")
    }

    fn name(&self) -> &str {
        "Defensive Defaults"
    }

    fn description(&self) -> &str {
        "Recommends enableRobotsTXT and enableGitInfo"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, config: &SiteConfig) -> Vec<LintDiagnostic> {
        DEFAULTS
            .iter()
            .filter(|(field, _)| config.get_bool(field) != Some(true))
            .map(|(field, reason)| {
                let location = match config.line_of(field) {
                    Some(line) => Location::line(config.path(), line),
                    None => Location::file(config.path()),
                };
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Recommended: enable {} - {}", field, reason),
                )
                .with_location(location)
                .with_suggestion(format!("Add `{} = true`", field))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::rules::toml_doc;

    #[test]
    fn warns_for_each_missing_flag() {
        let diagnostics = DefensiveDefaultsRule.check(&toml_doc(""));

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn disabled_flag_points_at_its_line() {
        let doc = toml_doc("enableRobotsTXT = true\nenableGitInfo = false");
        let diagnostics = DefensiveDefaultsRule.check(&doc);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("enableGitInfo"));
        assert_eq!(diagnostics[0].line(), Some(2));
    }

    #[test]
    fn both_enabled_is_clean() {
        let doc = toml_doc("enableRobotsTXT = true\nenableGitInfo = true");
        assert!(DefensiveDefaultsRule.check(&doc).is_empty());
    }
}
