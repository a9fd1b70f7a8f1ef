//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining checks:
//!
//! - [`LintRule`] - The trait every check implements, generic over its input
//! - [`RuleId`] - Unique identifier for a check
//! - [`Severity`] - Severity level for diagnostics (Info, Warning, Error)

use super::diagnostic::LintDiagnostic;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
///
/// Only [`Severity::Error`] affects the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Advisory only.
    Info,
    /// Should be fixed, never blocks.
    Warning,
    /// Must be fixed, blocks CI.
    Error,
}

impl Severity {
    /// All severities, most severe first (report grouping order).
    pub const DESCENDING: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single independent check over some input `I`.
///
/// Each validator owns a registry of rules over its own input type
/// (site config, markdown file, ...). Rules never see each other's
/// output, so one failing rule cannot stop another from running.
pub trait LintRule<I: ?Sized>: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the input and return any diagnostics.
    fn check(&self, input: &I) -> Vec<LintDiagnostic>;
}
