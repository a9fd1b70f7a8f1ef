//! Policy configuration.
//!
//! The lists and thresholds the checks consult are data, not code. They
//! live in an optional `sitecheck.yml` at the project root:
//!
//! ```yaml
//! content:
//!   generic_link_text: [click here, here, link, read more]
//!   index_files: [_index.md, index.md]
//! environment:
//!   tools:
//!     - name: Hugo Extended
//!       command: hugo
//!       version_args: [version]
//!       minimum: "0.112.0"
//!       require_marker: extended
//! ```
//!
//! # Example
//!
//! ```
//! use sitecheck::config::load_policy;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let policy = load_policy(temp.path(), None).unwrap();
//! assert!(policy.content.generic_link_text.iter().any(|t| t == "click here"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_policy_file, load_policy, parse_policy, POLICY_FILE_NAMES};
pub use schema::{ContentPolicy, EnvironmentPolicy, Policy, ToolPolicy};
