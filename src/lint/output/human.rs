//! Human-readable output formatter.
//!
//! Groups diagnostics by severity and ends with summary and status lines.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity, ValidationReport};
use crate::ui::SiteCheckTheme;
use std::io::Write;

/// Formats reports for terminal display.
pub struct HumanFormatter {
    /// Print only the count of Info diagnostics, not each line.
    pub quiet: bool,
    theme: SiteCheckTheme,
}

impl HumanFormatter {
    /// Create a new human formatter, with ANSI colors if `use_color` is set.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            SiteCheckTheme::new()
        } else {
            SiteCheckTheme::plain()
        };
        Self {
            quiet: false,
            theme,
        }
    }

    /// Collapse Info diagnostics into a single count line.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn section_heading(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "Errors",
            Severity::Warning => "Warnings",
            Severity::Info => "Info",
        }
    }

    fn styled_prefix(&self, severity: Severity) -> String {
        let style = match severity {
            Severity::Error => &self.theme.error,
            Severity::Warning => &self.theme.warning,
            Severity::Info => &self.theme.info,
        };
        style.apply_to(severity.to_string()).to_string()
    }

    fn write_diagnostic<W: Write>(&self, diag: &LintDiagnostic, writer: &mut W) -> std::io::Result<()> {
        // Header line: error[rule-id]: message
        writeln!(
            writer,
            "{}[{}]: {}",
            self.styled_prefix(diag.severity),
            diag.rule_id,
            diag.message
        )?;

        if let Some(ref location) = diag.location {
            writeln!(writer, "  {} {}", self.theme.dim.apply_to("-->"), location)?;
        }

        if let Some(ref suggestion) = diag.suggestion {
            writeln!(writer, "   = help: {}", suggestion)?;
        }

        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}: {}",
            self.theme.header.apply_to(&report.title),
            report.target
        )?;
        writeln!(writer)?;

        for severity in Severity::DESCENDING {
            let count = report.count(severity);
            if count == 0 {
                continue;
            }
            writeln!(
                writer,
                "{} ({}):",
                self.theme.highlight.apply_to(Self::section_heading(severity)),
                count
            )?;
            if severity == Severity::Info && self.quiet {
                writeln!(writer, "  {} informational suggestion(s) hidden", count)?;
            } else {
                for diag in report.with_severity(severity) {
                    self.write_diagnostic(diag, writer)?;
                }
            }
            writeln!(writer)?;
        }

        if let Some(stats) = report.stats {
            writeln!(
                writer,
                "Scanned {} file(s): {} internal link(s), {} external link(s), {} image(s)",
                stats.files, stats.internal_links, stats.external_links, stats.images
            )?;
        }

        writeln!(
            writer,
            "Summary: {} error(s), {} warning(s), {} info",
            report.error_count(),
            report.warning_count(),
            report.info_count()
        )?;

        let status = if !report.is_success() {
            self.theme.format_error("FAILED - fix errors before proceeding")
        } else if report.warning_count() > 0 {
            self.theme
                .format_warning("PASSED WITH WARNINGS - review recommendations")
        } else {
            self.theme.format_success("PASSED")
        };
        writeln!(writer, "Status: {}", status)?;

        Ok(())
    }
}
