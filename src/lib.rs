//! sitecheck - Validation tooling for a static documentation site.
//!
//! Three independent validators share one report model:
//!
//! - [`site`] - Site configuration checks (`hugo.toml`, `config.yaml`, ...)
//! - [`content`] - Markdown content checks and internal link resolution
//! - [`requirements`] - Local toolchain and repository checks
//!
//! Supporting modules:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Policy file loading (`sitecheck.yml`)
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, diagnostics, reports and output formatters
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use sitecheck::site::{ConfigFormat, ConfigValidator, SiteConfig};
//! use std::path::Path;
//!
//! let config = SiteConfig::parse(
//!     "title = \"Docs\"\n",
//!     ConfigFormat::Toml,
//!     Path::new("hugo.toml"),
//! ).unwrap();
//! let report = ConfigValidator::new().validate_document(&config);
//! assert!(!report.is_success());
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod lint;
pub mod requirements;
pub mod site;
pub mod ui;

pub use error::{Result, SiteCheckError};
