//! Required fields validation.
//!
//! This rule ensures the base URL, site title, and language code are set
//! at the document root.

use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::site::SiteConfig;

/// Fields every site config must define, with the reason shown to users.
pub const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("baseURL", "Base URL must be defined for proper site generation"),
    ("title", "Site title is required for SEO and accessibility"),
    ("languageCode", "Language code required for proper HTML lang attribute"),
];

/// Validates that required configuration fields are present.
pub struct RequiredFieldsRule;

impl LintRule<SiteConfig> for RequiredFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-fields")
    }

    fn name(&self) -> &str {
        "Required Fields"
    }

    fn description(&self) -> &str {
        "Ensures baseURL, title, and languageCode are present"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, config: &SiteConfig) -> Vec<LintDiagnostic> {
        REQUIRED_FIELDS
            .iter()
            .filter(|(field, _)| !config.has_value(field))
            .map(|(field, reason)| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Missing required field '{}': {}", field, reason),
                )
                .with_location(Location::file(config.path()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::rules::toml_doc;

    #[test]
    fn detects_all_missing_fields() {
        let diagnostics = RequiredFieldsRule.check(&toml_doc(""));

        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
        assert!(diagnostics[0].message.contains("baseURL"));
        assert!(diagnostics[1].message.contains("title"));
        assert!(diagnostics[2].message.contains("languageCode"));
    }

    #[test]
    fn passes_with_all_fields() {
        let doc = toml_doc(
            "baseURL = \"https://example.org/\"\ntitle = \"Wiki\"\nlanguageCode = \"en\"",
        );
        assert!(RequiredFieldsRule.check(&doc).is_empty());
    }

    #[test]
    fn field_names_match_case_insensitively() {
        let doc = toml_doc("baseurl = \"/\"\nTitle = \"Wiki\"\nlanguagecode = \"en\"");
        assert!(RequiredFieldsRule.check(&doc).is_empty());
    }

    #[test]
    fn nested_title_does_not_count() {
        let doc = toml_doc("baseURL = \"/\"\nlanguageCode = \"en\"\n[params]\ntitle = \"x\"");
        let diagnostics = RequiredFieldsRule.check(&doc);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'title'"));
    }
}
