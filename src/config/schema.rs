//! Policy schema.
//!
//! Policy is the editable data the checks consult: the generic link-text
//! denylist, index-file conventions, and the tools the environment must
//! provide. Every field has a default, so an absent or partial file is
//! always valid.

use serde::{Deserialize, Serialize};

/// Root of `sitecheck.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Content validator policy.
    pub content: ContentPolicy,
    /// Environment validator policy.
    pub environment: EnvironmentPolicy,
}

/// Policy for markdown content checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPolicy {
    /// Link texts that say nothing about their target (case-insensitive).
    pub generic_link_text: Vec<String>,
    /// File names that do not need frontmatter.
    pub frontmatter_exempt: Vec<String>,
    /// File names that serve a directory URL.
    pub index_files: Vec<String>,
    /// Directories, relative to the project root, whose files satisfy
    /// internal links (static assets).
    pub asset_dirs: Vec<String>,
    /// Maximum URL length shown in messages before truncation.
    pub max_url_display: usize,
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self {
            generic_link_text: [
                "click here",
                "here",
                "link",
                "read more",
                "more",
                "this",
                "this link",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            frontmatter_exempt: vec!["_index.md".to_string()],
            index_files: vec!["_index.md".to_string(), "index.md".to_string()],
            asset_dirs: vec!["static".to_string()],
            max_url_display: 50,
        }
    }
}

/// Policy for the local environment checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentPolicy {
    /// Tools to look up on PATH, in report order.
    pub tools: Vec<ToolPolicy>,
    /// Module manifest, relative to the project root.
    pub module_manifest: String,
    /// Module checksum/lock file, relative to the project root.
    pub module_checksums: String,
    /// Whether to check version-control identity.
    pub check_git_identity: bool,
}

impl Default for EnvironmentPolicy {
    fn default() -> Self {
        Self {
            tools: vec![
                ToolPolicy {
                    name: "Hugo Extended".to_string(),
                    command: "hugo".to_string(),
                    version_args: vec!["version".to_string()],
                    minimum: Some("0.112.0".to_string()),
                    require_marker: Some("extended".to_string()),
                    required: true,
                    install_hint: Some("Install Hugo Extended: https://gohugo.io/installation/".to_string()),
                },
                ToolPolicy {
                    name: "Go".to_string(),
                    command: "go".to_string(),
                    version_args: vec!["version".to_string()],
                    minimum: Some("1.20.0".to_string()),
                    require_marker: None,
                    required: true,
                    install_hint: Some("Install Go: https://go.dev/doc/install".to_string()),
                },
                ToolPolicy {
                    name: "Python".to_string(),
                    command: "python3".to_string(),
                    version_args: vec!["--version".to_string()],
                    minimum: Some("3.7.0".to_string()),
                    require_marker: None,
                    required: true,
                    install_hint: Some("Install Python 3.7+: https://www.python.org/downloads/".to_string()),
                },
                ToolPolicy {
                    name: "Git".to_string(),
                    command: "git".to_string(),
                    version_args: vec!["--version".to_string()],
                    minimum: Some("2.30.0".to_string()),
                    require_marker: None,
                    required: true,
                    install_hint: Some("Install Git: https://git-scm.com/downloads".to_string()),
                },
                ToolPolicy {
                    name: "Make".to_string(),
                    command: "make".to_string(),
                    version_args: vec!["--version".to_string()],
                    minimum: None,
                    require_marker: None,
                    required: false,
                    install_hint: None,
                },
            ],
            module_manifest: "go.mod".to_string(),
            module_checksums: "go.sum".to_string(),
            check_git_identity: true,
        }
    }
}

/// One external tool the environment should provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolPolicy {
    /// Display name.
    pub name: String,
    /// Binary looked up on PATH.
    pub command: String,
    /// Arguments that make the tool print its version.
    #[serde(default = "default_version_args")]
    pub version_args: Vec<String>,
    /// Minimum acceptable version (`major.minor[.patch]`).
    #[serde(default)]
    pub minimum: Option<String>,
    /// Text the version output must contain (case-insensitive).
    #[serde(default)]
    pub require_marker: Option<String>,
    /// Required tools produce Errors; optional ones Info/Warning.
    #[serde(default = "default_required")]
    pub required: bool,
    /// Install guidance shown when the tool is missing or too old.
    #[serde(default)]
    pub install_hint: Option<String>,
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

fn default_required() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_policy() {
        let policy = Policy::default();
        assert!(policy.content.generic_link_text.iter().any(|t| t == "click here"));
        assert_eq!(policy.content.frontmatter_exempt, ["_index.md"]);
        assert_eq!(policy.content.max_url_display, 50);
    }

    #[test]
    fn default_tools_are_ordered() {
        let env = EnvironmentPolicy::default();
        let commands: Vec<_> = env.tools.iter().map(|t| t.command.as_str()).collect();
        assert_eq!(commands, vec!["hugo", "go", "python3", "git", "make"]);
        assert!(!env.tools[4].required);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "content:\n  generic_link_text: [\"go\"]\n";
        let policy: Policy = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(policy.content.generic_link_text, vec!["go"]);
        assert_eq!(policy.content.index_files, vec!["_index.md", "index.md"]);
        assert_eq!(policy.environment, EnvironmentPolicy::default());
    }

    #[test]
    fn tool_policy_field_defaults() {
        let yaml = "name: Node\ncommand: node\n";
        let tool: ToolPolicy = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(tool.version_args, vec!["--version"]);
        assert!(tool.required);
        assert!(tool.minimum.is_none());
    }
}
