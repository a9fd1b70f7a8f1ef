//! Integration tests for the validator APIs.

use sitecheck::config::{ContentPolicy, EnvironmentPolicy, ToolPolicy};
use sitecheck::content::ContentValidator;
use sitecheck::lint::{LintDiagnostic, Severity, ValidationReport};
use sitecheck::requirements::{EnvironmentValidator, ProcessOutput, ProcessRunner};
use sitecheck::site::{ConfigFormat, ConfigValidator, SiteConfig};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn toml_config(raw: &str) -> SiteConfig {
    SiteConfig::parse(raw, ConfigFormat::Toml, Path::new("hugo.toml")).unwrap()
}

fn by_rule<'a>(report: &'a ValidationReport, rule: &str) -> Vec<&'a LintDiagnostic> {
    report
        .diagnostics
        .iter()
        .filter(|d| d.rule_id.as_str() == rule)
        .collect()
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project root with `content/` populated from `files`.
fn content_site(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("content")).unwrap();
    for (relative, text) in files {
        write(&temp.path().join("content"), relative, text);
    }
    temp
}

fn validate_content(temp: &TempDir) -> ValidationReport {
    ContentValidator::new(ContentPolicy::default())
        .with_project_root(temp.path())
        .validate(&temp.path().join("content"))
}

// --- Configuration ---

const CLEAN_CONFIG: &str = r#"
baseURL = "https://docs.example.org/"
title = "Example Docs"
languageCode = "en-us"
enableRobotsTXT = true
enableGitInfo = true

[params]
externalLinkRel = "noopener noreferrer"

[outputs]
home = ["HTML", "RSS", "JSON"]

[markup.goldmark.renderer]
unsafe = false

[[menu.main]]
identifier = "docs"
name = "Docs"
weight = 10

[[menu.main]]
identifier = "blog"
name = "Blog"
weight = 20
"#;

#[test]
fn missing_any_required_field_fails() {
    let cases = [
        "title = \"Docs\"\nlanguageCode = \"en\"\n",
        "baseURL = \"https://x.org/\"\nlanguageCode = \"en\"\n",
        "baseURL = \"https://x.org/\"\ntitle = \"Docs\"\n",
    ];
    let validator = ConfigValidator::new();

    for raw in cases {
        let report = validator.validate_document(&toml_config(raw));
        assert!(report.error_count() >= 1, "expected an error for:\n{}", raw);
        assert!(!report.is_success());
    }
}

#[test]
fn duplicate_menu_weights_warn_with_identifiers() {
    let raw = r#"
baseURL = "https://x.org/"
title = "Docs"
languageCode = "en"

[[menu.main]]
identifier = "guides"
weight = 5

[[menu.main]]
identifier = "reference"
weight = 5
"#;
    let report = ConfigValidator::new().validate_document(&toml_config(raw));

    let weights = by_rule(&report, "menu-weights");
    assert_eq!(weights.len(), 1);
    assert_eq!(weights[0].severity, Severity::Warning);
    assert!(weights[0].message.contains("'guides'"));
    assert!(weights[0].message.contains("'reference'"));
    assert!(report.is_success());
}

#[test]
fn clean_config_has_no_errors_or_warnings() {
    let report = ConfigValidator::new().validate_document(&toml_config(CLEAN_CONFIG));

    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 0);
    assert!(report.is_success_strict());
}

#[test]
fn missing_config_file_is_single_error() {
    let temp = TempDir::new().unwrap();
    let report = ConfigValidator::new().validate_path(&temp.path().join("hugo.toml"));

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn yaml_and_toml_configs_agree() {
    let yaml = r#"
baseURL: https://x.org/
title: Docs
"#;
    let toml = "baseURL = \"https://x.org/\"\ntitle = \"Docs\"\n";
    let validator = ConfigValidator::new();

    let from_yaml = validator
        .validate_document(&SiteConfig::parse(yaml, ConfigFormat::Yaml, Path::new("hugo.yaml")).unwrap());
    let from_toml = validator.validate_document(&toml_config(toml));

    assert_eq!(from_yaml.error_count(), from_toml.error_count());
    assert_eq!(from_yaml.warning_count(), from_toml.warning_count());
}

// --- Content ---

#[test]
fn each_empty_alt_image_is_one_warning_on_its_line() {
    let temp = content_site(&[(
        "gallery.md",
        "---\ntitle: Gallery\n---\n![](/img/a.png)\nSome text.\n![](/img/b.png) and ![Chart](/img/c.png)\n",
    )]);
    let report = validate_content(&temp);

    let missing_alt = by_rule(&report, "image-alt-text");
    assert_eq!(missing_alt.len(), 2);
    let lines: Vec<_> = missing_alt.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![Some(4), Some(6)]);
    for diag in missing_alt {
        assert_eq!(diag.severity, Severity::Warning);
        let location = diag.location.as_ref().unwrap();
        assert!(location.file.ends_with("gallery.md"));
    }
}

#[test]
fn internal_links_resolve_without_false_positives() {
    let temp = content_site(&[
        ("_index.md", "---\ntitle: Home\n---\n"),
        ("docs/_index.md", "---\ntitle: Docs\n---\n"),
        ("docs/install.md", "---\ntitle: Install\n---\n"),
        (
            "links.md",
            "---\ntitle: Links\n---\n\
             [Home](/)\n\
             [Docs](/docs/)\n\
             [Install](/docs/install/)\n\
             [Install source](/docs/install.md)\n\
             [Install section](/docs/install/#linux)\n\
             [Logo](/img/logo.png)\n\
             [Missing](/docs/missing/)\n\
             [Blog](/blog/)\n",
        ),
    ]);
    write(temp.path(), "static/img/logo.png", "png");

    let report = validate_content(&temp);

    let broken: Vec<_> = by_rule(&report, "broken-link")
        .iter()
        .map(|d| d.message.clone())
        .collect();
    assert_eq!(
        broken,
        vec![
            "Broken internal link: /docs/missing/".to_string(),
            "Broken internal link: /blog/".to_string(),
        ]
    );
    assert!(by_rule(&report, "broken-link")
        .iter()
        .all(|d| d.severity == Severity::Error));
}

#[test]
fn content_scan_is_idempotent() {
    let temp = content_site(&[
        ("a.md", "# A\n### Skipped\n[here](/nowhere/)\n"),
        ("b/c.md", "---\ntitle: C\n---\n![](x.png)\n```\ncode\n```\n"),
    ]);

    let first = validate_content(&temp);
    let second = validate_content(&temp);

    assert_eq!(first, second);
}

#[test]
fn skipped_heading_level_warns() {
    let temp = content_site(&[
        ("skip.md", "---\ntitle: Skip\n---\n# Top\n### Deep\n"),
        ("nested.md", "---\ntitle: Nested\n---\n# Top\n## Middle\n### Deep\n"),
    ]);
    let report = validate_content(&temp);

    let hierarchy = by_rule(&report, "heading-hierarchy");
    assert_eq!(hierarchy.len(), 1);
    assert_eq!(hierarchy[0].severity, Severity::Warning);
    let location = hierarchy[0].location.as_ref().unwrap();
    assert!(location.file.ends_with("skip.md"));
}

#[test]
fn untagged_code_block_is_single_info() {
    let temp = content_site(&[(
        "guide.md",
        "---\ntitle: Guide\n---\n# Guide\n\nRun this:\n\n```\nmake serve\n```\n",
    )]);
    let report = validate_content(&temp);

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.info_count(), 1);
    assert_eq!(report.diagnostics[0].rule_id.as_str(), "code-block-language");
    assert!(report.is_success());
    assert_eq!(report.exit_code(false), 0);
}

#[test]
fn missing_content_root_is_single_error() {
    let temp = TempDir::new().unwrap();
    let report = ContentValidator::new(ContentPolicy::default()).validate(&temp.path().join("content"));

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.exit_code(false), 1);
}

// --- Environment ---

/// Resolves every tool in `versions` to `/bin/<tool>` and prints the
/// given version text for it.
struct StaticRunner {
    versions: HashMap<&'static str, &'static str>,
}

impl ProcessRunner for StaticRunner {
    fn which(&self, tool: &str) -> Option<PathBuf> {
        self.versions
            .contains_key(tool)
            .then(|| PathBuf::from("/bin").join(tool))
    }

    fn output(&self, program: &Path, _args: &[String], _cwd: &Path) -> Option<ProcessOutput> {
        let name = program.file_name()?.to_str()?;
        self.versions.get(name).map(|v| ProcessOutput::ok(*v))
    }
}

fn tool(name: &str, command: &str, minimum: &str) -> ToolPolicy {
    ToolPolicy {
        name: name.to_string(),
        command: command.to_string(),
        version_args: vec!["--version".to_string()],
        minimum: Some(minimum.to_string()),
        require_marker: None,
        required: true,
        install_hint: None,
    }
}

#[test]
fn tool_below_minimum_is_exactly_one_error() {
    let temp = TempDir::new().unwrap();
    let policy = EnvironmentPolicy {
        tools: vec![
            tool("Go", "go", "1.20"),
            tool("Python", "python3", "3.7"),
            tool("Node", "node", "18.0"),
        ],
        check_git_identity: false,
        ..EnvironmentPolicy::default()
    };
    let runner = StaticRunner {
        versions: HashMap::from([
            ("go", "go version go1.19.2 darwin/arm64"),
            ("python3", "Python 3.12.1"),
            ("node", "v20.11.0"),
        ]),
    };

    let report = EnvironmentValidator::with_runner(policy, temp.path(), runner).validate();

    assert_eq!(report.error_count(), 1);
    let error = report.with_severity(Severity::Error).next().unwrap();
    assert!(error.message.starts_with("Go 1.19.2"));
    assert!(!report.is_success());
}
