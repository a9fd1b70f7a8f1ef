//! Frontmatter checks.

use crate::content::{ContentFile, Frontmatter};
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};

/// Requires a parsable frontmatter block on every page.
pub struct FrontmatterRule {
    exempt: Vec<String>,
}

impl FrontmatterRule {
    /// Create the rule; files named in `exempt` may omit frontmatter.
    pub fn new(exempt: Vec<String>) -> Self {
        Self { exempt }
    }

}

/// Whether `file` is named in `exempt`.
fn is_exempt(exempt: &[String], file: &ContentFile) -> bool {
    file.file_name()
        .is_some_and(|name| exempt.iter().any(|e| e == name))
}

impl LintRule<ContentFile> for FrontmatterRule {
    fn id(&self) -> RuleId {
        RuleId::new("frontmatter")
    }

    fn name(&self) -> &str {
        "Frontmatter"
    }

    fn description(&self) -> &str {
        "Pages must start with a closed --- or +++ frontmatter block"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        let diagnostic = match file.frontmatter() {
            Frontmatter::Parsed { .. } => return Vec::new(),
            Frontmatter::Missing if is_exempt(&self.exempt, file) => return Vec::new(),
            Frontmatter::Missing => LintDiagnostic::new(
                self.id(),
                self.default_severity(),
                "Missing frontmatter",
            )
            .with_location(Location::line(file.path(), 1))
            .with_suggestion("Start the file with a --- block containing at least a title"),
            Frontmatter::Unterminated { .. } => LintDiagnostic::new(
                self.id(),
                Severity::Error,
                "Frontmatter block is not closed",
            )
            .with_location(Location::line(file.path(), 1)),
            Frontmatter::Invalid { message, .. } => LintDiagnostic::new(
                self.id(),
                Severity::Error,
                format!("Invalid frontmatter: {}", message),
            )
            .with_location(Location::line(file.path(), 1)),
        };
        vec![diagnostic]
    }
}

/// Advises a `title` field in parsed frontmatter.
pub struct FrontmatterTitleRule {
    exempt: Vec<String>,
}

impl FrontmatterTitleRule {
    pub fn new(exempt: Vec<String>) -> Self {
        Self { exempt }
    }
}

impl LintRule<ContentFile> for FrontmatterTitleRule {
    fn id(&self) -> RuleId {
        RuleId::new("frontmatter-title")
    }

    fn name(&self) -> &str {
        "Frontmatter Title"
    }

    fn description(&self) -> &str {
        "Pages should set a title"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        if is_exempt(&self.exempt, file) || file.frontmatter().fields().is_none() {
            return Vec::new();
        }

        let has_title = match file.frontmatter().field("title") {
            Some(serde_json::Value::String(s)) => !s.trim().is_empty(),
            Some(serde_json::Value::Null) | None => false,
            Some(_) => true,
        };
        if has_title {
            return Vec::new();
        }

        vec![LintDiagnostic::new(
            self.id(),
            self.default_severity(),
            "Frontmatter has no title",
        )
        .with_location(Location::line(file.path(), 1))]
    }
}
