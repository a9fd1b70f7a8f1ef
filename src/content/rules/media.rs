//! Image alt text and code block language checks.

use crate::content::ContentFile;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};

/// Every image needs alt text.
pub struct ImageAltTextRule;

impl LintRule<ContentFile> for ImageAltTextRule {
    fn id(&self) -> RuleId {
        RuleId::new("image-alt-text")
    }

    fn name(&self) -> &str {
        "Image Alt Text"
    }

    fn description(&self) -> &str {
        "Images must have alt text"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        file.links()
            .iter()
            .filter(|l| l.is_image && l.text.is_empty())
            .map(|l| {
                let message = if l.target.is_empty() {
                    "Image missing alt text".to_string()
                } else {
                    format!("Image missing alt text: {}", l.target)
                };
                LintDiagnostic::new(self.id(), self.default_severity(), message)
                    .with_location(Location::line(file.path(), l.line))
            })
            .collect()
    }
}

/// Fenced code blocks should name their language.
pub struct CodeBlockLanguageRule;

impl LintRule<ContentFile> for CodeBlockLanguageRule {
    fn id(&self) -> RuleId {
        RuleId::new("code-block-language")
    }

    fn name(&self) -> &str {
        "Code Block Language"
    }

    fn description(&self) -> &str {
        "Fenced code blocks should declare a language"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, file: &ContentFile) -> Vec<LintDiagnostic> {
        file.fences()
            .iter()
            .filter(|fence| fence.language.is_none())
            .map(|fence| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    "Code block without language specification",
                )
                .with_location(Location::line(file.path(), fence.line))
                .with_suggestion("Add a language after the fence, e.g. ```bash")
            })
            .collect()
    }
}
