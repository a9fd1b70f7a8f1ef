//! Report emission shared by the validate commands.

use crate::lint::{render, OutputFormat, ValidationReport};
use crate::ui::UserInterface;

/// How reports are rendered and judged, taken from the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Warnings fail the run too.
    pub strict: bool,
    pub use_color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            strict: false,
            use_color: false,
        }
    }
}

impl ReportOptions {
    /// Whether `report` passes under these options.
    pub fn passes(&self, report: &ValidationReport) -> bool {
        if self.strict {
            report.is_success_strict()
        } else {
            report.is_success()
        }
    }
}

/// Render `report` to the UI and return whether it passed.
pub fn emit_report(
    ui: &mut dyn UserInterface,
    report: &ValidationReport,
    options: &ReportOptions,
) -> bool {
    let quiet = ui.output_mode().collapses_info();
    let rendered = render(report, options.format, options.use_color, quiet);
    ui.message(rendered.trim_end());
    options.passes(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{LintDiagnostic, RuleId, Severity};
    use crate::ui::MockUI;

    fn report_with(severity: Severity) -> ValidationReport {
        let mut report = ValidationReport::new("Configuration validation", "config.toml");
        report.push(LintDiagnostic::new(RuleId::new("test"), severity, "something"));
        report
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let report = report_with(Severity::Warning);
        let mut ui = MockUI::new();

        assert!(emit_report(&mut ui, &report, &ReportOptions::default()));

        let strict = ReportOptions {
            strict: true,
            ..ReportOptions::default()
        };
        assert!(!emit_report(&mut ui, &report, &strict));
    }

    #[test]
    fn errors_always_fail() {
        let mut ui = MockUI::new();
        assert!(!emit_report(&mut ui, &report_with(Severity::Error), &ReportOptions::default()));
        assert!(ui.has_message("error[test]: something"));
    }

    #[test]
    fn json_format_is_emitted_whole() {
        let mut ui = MockUI::new();
        let options = ReportOptions {
            format: OutputFormat::Json,
            ..ReportOptions::default()
        };
        emit_report(&mut ui, &report_with(Severity::Info), &options);

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["success"], true);
    }
}
