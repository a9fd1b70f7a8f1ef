//! Diagnostic collection, severity classification, and report rendering.
//!
//! This module is the plumbing shared by the three validators.
//!
//! # Overview
//!
//! - **Rules** - Independent checks ([`LintRule`] trait, generic over input)
//! - **Registry** - Ordered collection of checks ([`RuleRegistry`])
//! - **Diagnostics** - Issues with severity and location ([`LintDiagnostic`])
//! - **Reports** - A run's diagnostics plus counters ([`ValidationReport`])
//!
//! # Example
//!
//! ```
//! use sitecheck::lint::{LintDiagnostic, RuleId, Severity, ValidationReport};
//!
//! let mut report = ValidationReport::new("Content validation", "content");
//! report.push(LintDiagnostic::new(RuleId::new("code-block-language"), Severity::Info, "no tag"));
//!
//! // Info never blocks
//! assert!(report.is_success());
//! assert!(Severity::Info < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod report;
pub mod rule;
pub mod span;

pub use diagnostic::LintDiagnostic;
pub use output::{render, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use report::{ScanStats, ValidationReport};
pub use rule::{LintRule, RuleId, Severity};
pub use span::Location;
