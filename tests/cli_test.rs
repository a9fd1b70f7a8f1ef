//! Integration tests for the sitecheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CLEAN_CONFIG: &str = r#"
baseURL = "https://docs.example.org/"
title = "Example Docs"
languageCode = "en-us"
enableRobotsTXT = true
enableGitInfo = true

[params]
externalLinkRel = "noopener noreferrer"

[outputs]
home = ["HTML", "JSON"]
"#;

fn setup_site(config: Option<&str>, pages: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(config) = config {
        fs::write(temp.path().join("hugo.toml"), config).unwrap();
    }
    let content = temp.path().join("content");
    fs::create_dir_all(&content).unwrap();
    for (name, text) in pages {
        let path = content.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }
    temp
}

fn sitecheck(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("sitecheck"));
    cmd.current_dir(dir).env_remove("SITECHECK_POLICY").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("sitecheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("validate-config"))
        .stdout(predicate::str::contains("validate-content"))
        .stdout(predicate::str::contains("validate-env"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("sitecheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_clean_config_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(Some(CLEAN_CONFIG), &[]);
    sitecheck(temp.path())
        .arg("validate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration validation"))
        .stdout(predicate::str::contains("Summary: 0 error(s), 0 warning(s)"));
    Ok(())
}

#[test]
fn cli_missing_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(None, &[]);
    sitecheck(temp.path())
        .arg("validate-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Configuration file not found"));
    Ok(())
}

#[test]
fn cli_broken_link_fails_content() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(
        Some(CLEAN_CONFIG),
        &[("guide.md", "---\ntitle: Guide\n---\nSee [the setup page](/setup/).\n")],
    );
    sitecheck(temp.path())
        .arg("validate-content")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Broken internal link: /setup/"));
    Ok(())
}

#[test]
fn cli_project_flag_sets_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(
        Some(CLEAN_CONFIG),
        &[("guide.md", "---\ntitle: Guide\n---\n# Guide\n")],
    );
    let elsewhere = TempDir::new().unwrap();
    sitecheck(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Content validation"));
    Ok(())
}

#[test]
fn cli_json_format_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(
        Some(CLEAN_CONFIG),
        &[("guide.md", "---\ntitle: Guide\n---\n```\ncode\n```\n")],
    );
    let output = sitecheck(temp.path())
        .args(["validate-content", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["success"], true);
    Ok(())
}

#[test]
fn cli_validate_json_is_single_document() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(
        Some(CLEAN_CONFIG),
        &[("guide.md", "---\ntitle: Guide\n---\n# Guide\n")],
    );
    for args in [&["--format", "json", "validate"][..], &["--format", "json"][..]] {
        let output = sitecheck(temp.path()).args(args).output()?;

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(json["success"], true);
        assert_eq!(json["config"]["title"], "Configuration validation");
        assert_eq!(json["content"]["title"], "Content validation");
    }
    Ok(())
}

#[test]
fn cli_strict_fails_on_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(
        Some(CLEAN_CONFIG),
        &[("guide.md", "No frontmatter here.\n")],
    );
    sitecheck(temp.path())
        .arg("validate-content")
        .assert()
        .success();
    sitecheck(temp.path())
        .args(["validate-content", "--strict"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_quiet_hides_info() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(
        Some(CLEAN_CONFIG),
        &[("guide.md", "---\ntitle: Guide\n---\n```\ncode\n```\n")],
    );
    sitecheck(temp.path())
        .args(["validate-content", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("informational suggestion(s) hidden"))
        .stdout(predicate::str::contains("Code block without language").not());
    Ok(())
}

#[test]
fn cli_env_with_empty_tool_policy_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(None, &[]);
    fs::write(
        temp.path().join("sitecheck.yml"),
        "environment:\n  tools: []\n  check_git_identity: false\n",
    )?;
    sitecheck(temp.path())
        .arg("validate-env")
        .assert()
        .success()
        .stdout(predicate::str::contains("No go.mod found"));
    Ok(())
}

#[test]
fn cli_invalid_policy_reports_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_site(Some(CLEAN_CONFIG), &[]);
    fs::write(temp.path().join("sitecheck.yml"), "content: 42\n")?;
    sitecheck(temp.path())
        .arg("validate-content")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse policy"));
    Ok(())
}
