//! Environment readiness checks.
//!
//! This module checks whether the external tools a site build needs are
//! installed and recent enough, and whether the module manifest and
//! version-control identity are in order.
//!
//! # Modules
//!
//! - [`probe`] - PATH lookup and the [`ProcessRunner`] seam
//! - [`version`] - Version extraction and comparison
//! - [`status`] - Per-tool results
//! - [`checker`] - The [`EnvironmentValidator`]

pub mod checker;
pub mod probe;
pub mod status;
pub mod version;

pub use checker::{EnvironmentCheck, EnvironmentValidator, ENV_REPORT_TITLE};
pub use probe::{ProcessOutput, ProcessRunner, SystemRunner};
pub use status::{ToolReport, ToolStatus};
pub use version::Version;
