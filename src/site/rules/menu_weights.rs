//! Menu weight consistency.
//!
//! Entries sharing a weight within one menu have no defined order. Menus
//! without any weights fall back to the generator's default ordering.

use std::collections::BTreeMap;

use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::site::{Menu, SiteConfig};

/// Detects duplicate menu weights.
pub struct MenuWeightsRule;

impl MenuWeightsRule {
    fn check_menu(&self, config: &SiteConfig, menu: &Menu) -> Vec<LintDiagnostic> {
        if menu.entries.is_empty() {
            return Vec::new();
        }

        let mut by_weight: BTreeMap<i64, Vec<&crate::site::MenuEntry>> = BTreeMap::new();
        for entry in &menu.entries {
            if let Some(weight) = entry.weight {
                by_weight.entry(weight).or_default().push(entry);
            }
        }

        if by_weight.is_empty() {
            return vec![LintDiagnostic::new(
                self.id(),
                Severity::Info,
                format!(
                    "Menu '{}' has no weights - default ordering applies",
                    menu.name
                ),
            )
            .with_location(Location::file(config.path()))];
        }

        by_weight
            .into_iter()
            .filter(|(_, entries)| entries.len() > 1)
            .map(|(weight, entries)| {
                let names = entries
                    .iter()
                    .map(|e| format!("'{}'", e.identifier))
                    .collect::<Vec<_>>()
                    .join(", ");
                let location = match entries.iter().find_map(|e| e.line) {
                    Some(line) => Location::line(config.path(), line),
                    None => Location::file(config.path()),
                };
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Duplicate weight {} in menu '{}' shared by {} - ordering is not deterministic",
                        weight, menu.name, names
                    ),
                )
                .with_location(location)
            })
            .collect()
    }
}

impl LintRule<SiteConfig> for MenuWeightsRule {
    fn id(&self) -> RuleId {
        RuleId::new("menu-weights")
    }

    fn name(&self) -> &str {
        "Menu Weights"
    }

    fn description(&self) -> &str {
        "Detects menu entries that share a weight"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, config: &SiteConfig) -> Vec<LintDiagnostic> {
        config
            .menus()
            .iter()
            .flat_map(|menu| self.check_menu(config, menu))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::rules::toml_doc;

    #[test]
    fn unique_weights_are_clean() {
        let doc = toml_doc(
            "[[menu.main]]\nidentifier = \"a\"\nweight = 1\n[[menu.main]]\nidentifier = \"b\"\nweight = 2",
        );
        assert!(MenuWeightsRule.check(&doc).is_empty());
    }

    #[test]
    fn duplicate_weights_name_identifiers() {
        let doc = toml_doc(
            "[[menu.main]]\nidentifier = \"docs\"\nweight = 10\n\
             [[menu.main]]\nidentifier = \"blog\"\nweight = 10\n\
             [[menu.main]]\nidentifier = \"about\"\nweight = 30",
        );
        let diagnostics = MenuWeightsRule.check(&doc);

        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.message.contains("'docs'"));
        assert!(diag.message.contains("'blog'"));
        assert!(diag.message.contains("weight 10"));
        assert!(!diag.message.contains("about"));
        assert_eq!(diag.line(), Some(1));
    }

    #[test]
    fn same_weight_in_different_menus_is_fine() {
        let doc = toml_doc(
            "[[menu.main]]\nname = \"a\"\nweight = 1\n[[menu.footer]]\nname = \"b\"\nweight = 1",
        );
        assert!(MenuWeightsRule.check(&doc).is_empty());
    }

    #[test]
    fn no_weights_is_info() {
        let doc = toml_doc("[[menu.main]]\nname = \"a\"\n[[menu.main]]\nname = \"b\"");
        let diagnostics = MenuWeightsRule.check(&doc);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Info);
    }

    #[test]
    fn no_menus_is_clean() {
        assert!(MenuWeightsRule.check(&toml_doc("title = \"x\"")).is_empty());
    }
}
