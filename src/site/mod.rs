//! Site configuration validation.
//!
//! [`ConfigValidator`] loads the generator's configuration document and
//! runs every built-in check against it. Checks are independent: a
//! missing title does not stop the menu or security checks from running.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use sitecheck::site::{ConfigFormat, ConfigValidator, SiteConfig};
//!
//! let config = SiteConfig::parse(
//!     "baseURL = \"/\"\ntitle = \"Wiki\"\nlanguageCode = \"en\"",
//!     ConfigFormat::Toml,
//!     Path::new("config.toml"),
//! ).unwrap();
//!
//! let report = ConfigValidator::new().validate_document(&config);
//! assert!(report.is_success());
//! ```

pub mod document;
pub mod rules;
pub mod validator;

pub use document::{default_config_path, ConfigFormat, Menu, MenuEntry, SiteConfig, CONFIG_FILE_NAMES};
pub use validator::{ConfigValidator, CONFIG_REPORT_TITLE};
