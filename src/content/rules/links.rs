//! Link hygiene checks: link text, URL scheme, relative paths.

use crate::content::links::{is_root_anchored, is_templated, truncate_display, LinkKind};
use crate::content::ContentFile;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};

/// Flags empty and non-descriptive link text.
pub struct LinkTextRule {
    /// Lowercased denylist.
    generic: Vec<String>,
}

impl LinkTextRule {
    /// Create the rule with a denylist of generic phrases.
    pub fn new(generic: &[String]) -> Self {
        Self {
            generic: generic.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Whether `text` is on the denylist, ignoring case, surrounding
    /// whitespace, and trailing punctuation.
    fn is_generic(&self, text: &str) -> bool {
        let normalized = text
            .trim()
            .trim_end_matches(['.', '!', ':', ',', '?'])
            .trim()
            .to_lowercase();
        self.generic.iter().any(|phrase| *phrase == normalized)
    }
}

impl LintRule<ContentFile> for LinkTextRule {
    fn id(&self) -> RuleId {
        RuleId::new("link-text")
    }

    fn name(&self) -> &str {
        "Link Text"
    }

    fn description(&self) -> &str {
        "Link text must describe its target"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        for link in file.links().iter().filter(|l| !l.is_image) {
            let location = Location::line(file.path(), link.line);
            if link.text.is_empty() {
                diagnostics.push(
                    LintDiagnostic::new(self.id(), Severity::Error, "Empty link text")
                        .with_location(location),
                );
            } else if self.is_generic(&link.text) {
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("Non-descriptive link text: '{}'", link.text),
                    )
                    .with_location(location)
                    .with_suggestion("Describe where the link goes"),
                );
            }
        }
        diagnostics
    }
}

/// Flags unencrypted external links.
pub struct LinkSchemeRule {
    max_display: usize,
}

impl LinkSchemeRule {
    pub fn new(max_display: usize) -> Self {
        Self { max_display }
    }
}

impl LintRule<ContentFile> for LinkSchemeRule {
    fn id(&self) -> RuleId {
        RuleId::new("link-scheme")
    }

    fn name(&self) -> &str {
        "Link Scheme"
    }

    fn description(&self) -> &str {
        "External links should use HTTPS"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        file.links()
            .iter()
            .filter(|l| !l.is_image && l.kind() == LinkKind::External)
            .filter(|l| l.target.to_ascii_lowercase().starts_with("http://"))
            .map(|l| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Insecure HTTP link: {}",
                        truncate_display(&l.target, self.max_display)
                    ),
                )
                .with_location(Location::line(file.path(), l.line))
                .with_suggestion("Use https://")
            })
            .collect()
    }
}

/// Advises against relative file references.
///
/// Bare targets such as `guide.md` depend on the page's output path.
/// Root-anchored paths and explicit `../` paths are left alone.
pub struct RelativeLinkRule {
    max_display: usize,
}

impl RelativeLinkRule {
    pub fn new(max_display: usize) -> Self {
        Self { max_display }
    }
}

impl LintRule<ContentFile> for RelativeLinkRule {
    fn id(&self) -> RuleId {
        RuleId::new("relative-link")
    }

    fn name(&self) -> &str {
        "Relative Link"
    }

    fn description(&self) -> &str {
        "Internal links to files should be anchored at the site root"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        file.links()
            .iter()
            .filter(|l| !l.is_image && l.kind() == LinkKind::Internal)
            .filter(|l| !is_root_anchored(&l.target) && !is_templated(&l.target))
            .filter(|l| l.target.contains('.') && !l.target.starts_with("../"))
            .map(|l| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Relative link without path prefix: {}",
                        truncate_display(&l.target, self.max_display)
                    ),
                )
                .with_location(Location::line(file.path(), l.line))
                .with_suggestion("Start internal links with /")
            })
            .collect()
    }
}
