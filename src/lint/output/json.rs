//! JSON output formatter.
//!
//! Formats reports as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{ScanStats, Severity, ValidationReport};
use serde::Serialize;
use std::io::Write;

/// Formats reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    target: &'a str,
    success: bool,
    diagnostics: Vec<JsonDiagnostic>,
    summary: JsonSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ScanStats>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule_id: String,
    severity: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    info: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    /// The report as a JSON value, for embedding in a larger document.
    pub fn to_value(&self, report: &ValidationReport) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(Self::output(report))
    }

    fn output(report: &ValidationReport) -> JsonOutput<'_> {
        let diagnostics = report
            .diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: d.rule_id.0.clone(),
                severity: d.severity.to_string(),
                message: d.message.clone(),
                file: d.location.as_ref().map(|l| l.file.display().to_string()),
                line: d.line(),
                suggestion: d.suggestion.clone(),
            })
            .collect();

        JsonOutput {
            title: &report.title,
            target: &report.target,
            success: report.is_success(),
            diagnostics,
            summary: JsonSummary {
                total: report.diagnostics.len(),
                errors: report.count(Severity::Error),
                warnings: report.count(Severity::Warning),
                info: report.count(Severity::Info),
            },
            stats: report.stats,
        }
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &Self::output(report)).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{LintDiagnostic, Location, RuleId};

    fn render(report: &ValidationReport) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let mut report = ValidationReport::new("Configuration validation", "config.toml");
        report.push(
            LintDiagnostic::new(RuleId::new("required-fields"), Severity::Error, "Missing title")
                .with_location(Location::file("config.toml")),
        );

        let parsed = render(&report);

        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["diagnostics"][0]["rule_id"], "required-fields");
        assert_eq!(parsed["diagnostics"][0]["severity"], "error");
        assert_eq!(parsed["diagnostics"][0]["file"], "config.toml");
        assert!(parsed["diagnostics"][0].get("line").is_none());
        assert_eq!(parsed["summary"]["errors"], 1);
    }

    #[test]
    fn includes_stats_when_present() {
        let mut report = ValidationReport::new("Content validation", "content");
        report.stats = Some(ScanStats {
            files: 2,
            ..Default::default()
        });

        let parsed = render(&report);
        assert_eq!(parsed["stats"]["files"], 2);
        assert_eq!(parsed["summary"]["total"], 0);
        assert_eq!(parsed["success"], true);
    }

    #[test]
    fn value_matches_written_output() {
        let mut report = ValidationReport::new("Content validation", "content");
        report.push(LintDiagnostic::new(RuleId::new("broken-link"), Severity::Error, "Broken"));

        let value = JsonFormatter::new().to_value(&report).unwrap();
        assert_eq!(value, render(&report));
        assert_eq!(value["summary"]["errors"], 1);
    }

    #[test]
    fn omits_stats_when_absent() {
        let report = ValidationReport::new("Environment validation", "local machine");
        assert!(render(&report).get("stats").is_none());
    }
}
