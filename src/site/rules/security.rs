//! Security audit.
//!
//! Raw HTML in markdown is allowed but noted; external links should carry
//! a referrer-protection attribute.

use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::site::SiteConfig;

const UNSAFE_HTML_KEY: &str = "markup.goldmark.renderer.unsafe";
const REFERRER_TOKENS: &[&str] = &["noreferrer", "noopener"];

/// Audits security-relevant rendering settings.
pub struct SecurityAuditRule;

impl LintRule<SiteConfig> for SecurityAuditRule {
    fn id(&self) -> RuleId {
        RuleId::new("security-audit")
    }

    fn name(&self) -> &str {
        "Security Audit"
    }

    fn description(&self) -> &str {
        "Flags raw HTML rendering and external links without noopener/noreferrer"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, config: &SiteConfig) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        if config.get_bool(UNSAFE_HTML_KEY) == Some(true) {
            let location = match config.line_of("unsafe") {
                Some(line) => Location::line(config.path(), line),
                None => Location::file(config.path()),
            };
            diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    Severity::Info,
                    "Unsafe HTML rendering enabled - ensure content is trusted",
                )
                .with_location(location),
            );
        }

        let has_rel = config.string_values().iter().any(|value| {
            let value = value.to_lowercase();
            REFERRER_TOKENS.iter().any(|token| value.contains(token))
        });
        if !has_rel {
            diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    "External links are not configured with a referrer-protection attribute",
                )
                .with_location(Location::file(config.path()))
                .with_suggestion("Set params.externalLinkRel = \"noopener noreferrer\""),
            );
        }

        diagnostics
    }
}
