//! Report output formatters.
//!
//! This module provides formatters for rendering a [`ValidationReport`]
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::ValidationReport;
use std::io::Write;
use std::str::FromStr;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Trait for formatting reports.
pub trait LintFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()>;
}

/// Render a report with the chosen format into a string.
pub fn render(report: &ValidationReport, format: OutputFormat, use_color: bool, quiet: bool) -> String {
    let mut output = Vec::new();
    let result = match format {
        OutputFormat::Human => HumanFormatter::new(use_color)
            .quiet(quiet)
            .format(report, &mut output),
        OutputFormat::Json => JsonFormatter::new().format(report, &mut output),
    };
    if let Err(e) = result {
        tracing::warn!("failed to render report: {}", e);
    }
    String::from_utf8_lossy(&output).into_owned()
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
