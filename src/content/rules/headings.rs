//! Heading hierarchy.
//!
//! A heading may go at most one level deeper than the heading before it,
//! and a page has at most one level-1 heading.

use crate::content::ContentFile;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};

pub struct HeadingHierarchyRule;

impl LintRule<ContentFile> for HeadingHierarchyRule {
    fn id(&self) -> RuleId {
        RuleId::new("heading-hierarchy")
    }

    fn name(&self) -> &str {
        "Heading Hierarchy"
    }

    fn description(&self) -> &str {
        "Detects skipped heading levels and repeated h1 headings"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut previous = 0;
        let mut first_h1: Option<usize> = None;

        for heading in file.headings() {
            if previous > 0 && heading.level > previous + 1 {
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "Heading level skipped: h{} follows h{}",
                            heading.level, previous
                        ),
                    )
                    .with_location(Location::line(file.path(), heading.line))
                    .with_suggestion(format!("Use h{} here", previous + 1)),
                );
            }

            if heading.level == 1 {
                match first_h1 {
                    None => first_h1 = Some(heading.line),
                    Some(first) => diagnostics.push(
                        LintDiagnostic::new(
                            self.id(),
                            self.default_severity(),
                            format!("Multiple h1 headings (first on line {})", first),
                        )
                        .with_location(Location::line(file.path(), heading.line)),
                    ),
                }
            }

            previous = heading.level;
        }

        diagnostics
    }
}
