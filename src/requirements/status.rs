//! Tool status types.
//!
//! Each probed tool produces a [`ToolReport`] describing whether it was
//! found, what version it reported, and how that compares to the policy.

use std::path::PathBuf;

use super::version::Version;

/// The outcome of probing one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Found and acceptable.
    Satisfied,
    /// Not on PATH, or could not be started.
    Missing,
    /// Version below the policy minimum.
    Outdated { minimum: Version },
    /// Version output lacks a required marker (e.g. "extended").
    MissingMarker { marker: String },
    /// A minimum is set but no version could be read.
    UnknownVersion,
}

impl ToolStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ToolStatus::Satisfied)
    }
}

/// What was found for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    /// Display name from the policy.
    pub name: String,
    /// Whether the policy marks the tool required.
    pub required: bool,
    /// Resolved binary path.
    pub path: Option<PathBuf>,
    /// Version parsed from the tool's output.
    pub version: Option<Version>,
    pub status: ToolStatus,
}

impl ToolReport {
    /// One-line description for status output, without the ✓/✗ icon.
    pub fn summary(&self) -> String {
        let optional = if self.required { "" } else { " (optional)" };
        match (&self.status, &self.version) {
            (ToolStatus::Missing, _) => format!("{}{}: not found", self.name, optional),
            (ToolStatus::Outdated { minimum }, Some(version)) => format!(
                "{}{}: {} (requires {}+)",
                self.name, optional, version, minimum
            ),
            (ToolStatus::MissingMarker { marker }, _) => {
                format!("{}{}: missing '{}' edition", self.name, optional, marker)
            }
            (ToolStatus::UnknownVersion, _) => {
                format!("{}{}: version unknown", self.name, optional)
            }
            (_, Some(version)) => format!("{}{}: {}", self.name, optional, version),
            (_, None) => format!("{}{}: found", self.name, optional),
        }
    }
}
