//! Validation reports.
//!
//! A [`ValidationReport`] is what every validator produces: the ordered
//! diagnostics of one run plus, for content scans, aggregate counters.

use serde::Serialize;

use super::diagnostic::LintDiagnostic;
use super::rule::Severity;

/// Counters collected while scanning a content tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Markdown files read successfully.
    pub files: usize,
    /// Links to pages inside the site.
    pub internal_links: usize,
    /// Links to other origins.
    pub external_links: usize,
    /// Image references.
    pub images: usize,
    /// Distinct root-anchored targets that did not resolve.
    pub broken_targets: usize,
}

/// The result of one validator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Report heading, e.g. "Configuration validation".
    pub title: String,
    /// What was validated (path or description).
    pub target: String,
    /// Diagnostics in the order the checks produced them.
    pub diagnostics: Vec<LintDiagnostic>,
    /// Scan counters, for validators that walk files.
    pub stats: Option<ScanStats>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
            diagnostics: Vec::new(),
            stats: None,
        }
    }

    /// Append one diagnostic.
    pub fn push(&mut self, diagnostic: LintDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append many diagnostics, keeping their order.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = LintDiagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Number of diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    /// Diagnostics of one severity, in report order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &LintDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Success means no Error-severity diagnostics.
    pub fn is_success(&self) -> bool {
        self.error_count() == 0
    }

    /// Success under `--strict`: no Errors and no Warnings.
    pub fn is_success_strict(&self) -> bool {
        self.error_count() == 0 && self.warning_count() == 0
    }

    /// Process exit code for this report.
    pub fn exit_code(&self, strict: bool) -> i32 {
        let ok = if strict {
            self.is_success_strict()
        } else {
            self.is_success()
        };
        if ok {
            0
        } else {
            1
        }
    }
}
