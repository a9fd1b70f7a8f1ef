//! Environment validator.
//!
//! Probes the tools listed in the environment policy, the module manifest,
//! and version-control identity. Required tools that are missing or too old
//! are Errors; everything else is advisory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{EnvironmentPolicy, ToolPolicy};
use crate::lint::{LintDiagnostic, Location, RuleId, Severity, ValidationReport};

use super::probe::{ProcessRunner, SystemRunner};
use super::status::{ToolReport, ToolStatus};
use super::version::Version;

/// Report heading for environment runs.
pub const ENV_REPORT_TITLE: &str = "Environment validation";

const GIT_IDENTITY_KEYS: &[&str] = &["user.name", "user.email"];

/// An environment run: the report plus per-tool results.
#[derive(Debug, Clone)]
pub struct EnvironmentCheck {
    pub report: ValidationReport,
    pub tools: Vec<ToolReport>,
}

/// Checks the local machine against an [`EnvironmentPolicy`].
pub struct EnvironmentValidator<R: ProcessRunner = SystemRunner> {
    policy: EnvironmentPolicy,
    project_root: PathBuf,
    runner: R,
}

impl EnvironmentValidator<SystemRunner> {
    /// Probe the real system.
    pub fn new(policy: EnvironmentPolicy, project_root: &Path) -> Self {
        Self::with_runner(policy, project_root, SystemRunner::new())
    }
}

impl<R: ProcessRunner> EnvironmentValidator<R> {
    /// Probe through a custom runner.
    pub fn with_runner(policy: EnvironmentPolicy, project_root: &Path, runner: R) -> Self {
        Self {
            policy,
            project_root: project_root.to_path_buf(),
            runner,
        }
    }

    /// Run every check and return the report.
    pub fn validate(&self) -> ValidationReport {
        self.check().report
    }

    /// Run every check, keeping per-tool results.
    pub fn check(&self) -> EnvironmentCheck {
        info!(root = %self.project_root.display(), "validating environment");
        let mut report = ValidationReport::new(ENV_REPORT_TITLE, self.project_root.display().to_string());
        let mut tools = Vec::new();

        for tool in &self.policy.tools {
            let (tool_report, diagnostics) = self.check_tool(tool);
            debug!(tool = %tool.command, status = ?tool_report.status, "probed tool");
            tools.push(tool_report);
            report.extend(diagnostics);
        }

        report.extend(self.check_module_manifest());
        if self.policy.check_git_identity {
            report.extend(self.check_git_identity());
        }

        EnvironmentCheck { report, tools }
    }

    /// Probe one tool.
    pub fn check_tool(&self, tool: &ToolPolicy) -> (ToolReport, Vec<LintDiagnostic>) {
        let mut report = ToolReport {
            name: tool.name.clone(),
            required: tool.required,
            path: None,
            version: None,
            status: ToolStatus::Satisfied,
        };

        let output = self.runner.which(&tool.command).and_then(|path| {
            report.path = Some(path.clone());
            self.runner
                .output(&path, &tool.version_args, &self.project_root)
        });

        let Some(output) = output else {
            report.status = ToolStatus::Missing;
            let diagnostic = if tool.required {
                let message = match &report.path {
                    Some(path) => format!("{} found at {} but could not be run", tool.name, path.display()),
                    None => format!("{} not found on PATH", tool.name),
                };
                with_hint(
                    LintDiagnostic::new(RuleId::new("required-tools"), Severity::Error, message),
                    tool,
                )
            } else {
                LintDiagnostic::new(
                    RuleId::new("required-tools"),
                    Severity::Info,
                    format!("{} not found (optional)", tool.name),
                )
            };
            return (report, vec![diagnostic]);
        };

        let text = output.combined();
        let failure_severity = if tool.required {
            Severity::Error
        } else {
            Severity::Warning
        };

        if let Some(marker) = &tool.require_marker {
            if !text.to_lowercase().contains(&marker.to_lowercase()) {
                report.status = ToolStatus::MissingMarker {
                    marker: marker.clone(),
                };
                let diagnostic = LintDiagnostic::new(
                    RuleId::new("tool-version"),
                    failure_severity,
                    format!("{} is not the '{}' edition", tool.name, marker),
                );
                return (report, vec![with_hint(diagnostic, tool)]);
            }
        }

        report.version = Version::extract(&text);

        let Some(minimum) = &tool.minimum else {
            return (report, Vec::new());
        };
        let Some(minimum) = Version::extract(minimum) else {
            report.status = ToolStatus::UnknownVersion;
            let diagnostic = LintDiagnostic::new(
                RuleId::new("tool-version"),
                Severity::Error,
                format!("Invalid minimum version '{}' for {} in policy", minimum, tool.name),
            );
            return (report, vec![diagnostic]);
        };

        let diagnostic = match report.version {
            None => {
                report.status = ToolStatus::UnknownVersion;
                LintDiagnostic::new(
                    RuleId::new("tool-version"),
                    failure_severity,
                    format!("Could not determine {} version", tool.name),
                )
            }
            Some(found) if !found.meets(&minimum) => {
                report.status = ToolStatus::Outdated { minimum };
                with_hint(
                    LintDiagnostic::new(
                        RuleId::new("tool-version"),
                        failure_severity,
                        format!("{} {} is below minimum {}", tool.name, found, minimum),
                    ),
                    tool,
                )
            }
            Some(_) => return (report, Vec::new()),
        };
        (report, vec![diagnostic])
    }

    /// Check the module manifest and its checksum file.
    pub fn check_module_manifest(&self) -> Vec<LintDiagnostic> {
        let rule = || RuleId::new("module-manifest");
        let manifest = self.project_root.join(&self.policy.module_manifest);
        let location = Location::file(&manifest);

        if !manifest.is_file() {
            return vec![LintDiagnostic::new(
                rule(),
                Severity::Info,
                format!("No {} found - module checks skipped", self.policy.module_manifest),
            )];
        }

        let content = match fs::read_to_string(&manifest) {
            Ok(content) => content,
            Err(err) => {
                return vec![LintDiagnostic::new(
                    rule(),
                    Severity::Warning,
                    format!("Could not read {}: {}", self.policy.module_manifest, err),
                )
                .with_location(location)];
            }
        };

        let mut diagnostics = Vec::new();

        let first_directive = content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with("//"));
        let declares_module = first_directive
            .and_then(|line| line.strip_prefix("module"))
            .is_some_and(|rest| rest.starts_with(char::is_whitespace) && !rest.trim().is_empty());
        if !declares_module {
            diagnostics.push(
                LintDiagnostic::new(
                    rule(),
                    Severity::Warning,
                    format!(
                        "{} does not start with a module directive",
                        self.policy.module_manifest
                    ),
                )
                .with_location(location.clone()),
            );
        }

        let has_requires = content
            .lines()
            .any(|line| line.trim_start().starts_with("require"));
        if !has_requires {
            return diagnostics;
        }

        let checksums = self.project_root.join(&self.policy.module_checksums);
        if !checksums.is_file() {
            diagnostics.push(
                LintDiagnostic::new(
                    rule(),
                    Severity::Warning,
                    format!(
                        "{} requires modules but {} is missing",
                        self.policy.module_manifest, self.policy.module_checksums
                    ),
                )
                .with_location(location)
                .with_suggestion("Run `go mod tidy`"),
            );
            return diagnostics;
        }

        if let Some(go) = self.runner.which("go") {
            let args = ["mod".to_string(), "verify".to_string()];
            match self.runner.output(&go, &args, &self.project_root) {
                Some(output) if !output.success => {
                    let detail = output
                        .combined()
                        .lines()
                        .map(str::trim)
                        .find(|l| !l.is_empty())
                        .unwrap_or("no output")
                        .to_string();
                    diagnostics.push(
                        LintDiagnostic::new(
                            rule(),
                            Severity::Warning,
                            format!("go mod verify failed: {}", detail),
                        )
                        .with_location(location),
                    );
                }
                Some(_) => {}
                None => debug!("go mod verify could not be run"),
            }
        }

        diagnostics
    }

    /// Check version-control identity configuration.
    pub fn check_git_identity(&self) -> Vec<LintDiagnostic> {
        let rule = || RuleId::new("git-identity");
        let Some(git) = self.runner.which("git") else {
            // Reported by the tool checks.
            return Vec::new();
        };

        let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let inside = self
            .runner
            .output(&git, &args(&["rev-parse", "--is-inside-work-tree"]), &self.project_root)
            .is_some_and(|o| o.success && o.stdout.trim() == "true");
        if !inside {
            return vec![LintDiagnostic::new(
                rule(),
                Severity::Info,
                "Not inside a git repository - identity check skipped",
            )];
        }

        GIT_IDENTITY_KEYS
            .iter()
            .filter(|key| {
                !self
                    .runner
                    .output(&git, &args(&["config", **key]), &self.project_root)
                    .is_some_and(|o| o.success && !o.stdout.trim().is_empty())
            })
            .map(|key| {
                LintDiagnostic::new(
                    rule(),
                    Severity::Warning,
                    format!("Git {} is not set - commits will lack attribution", key),
                )
                .with_suggestion(format!("git config --global {} \"...\"", key))
            })
            .collect()
    }
}

fn with_hint(diagnostic: LintDiagnostic, tool: &ToolPolicy) -> LintDiagnostic {
    match &tool.install_hint {
        Some(hint) => diagnostic.with_suggestion(hint.clone()),
        None => diagnostic,
    }
}
