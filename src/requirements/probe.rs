//! Tool lookup and process execution.
//!
//! Tools are found by walking PATH entries directly rather than shelling
//! out to `which`, whose behavior varies across systems and is sometimes a
//! shell builtin. Everything that touches the machine goes through the
//! [`ProcessRunner`] trait so checks can be exercised with a fake.
//!
//! # Example
//!
//! ```no_run
//! use sitecheck::requirements::probe::{ProcessRunner, SystemRunner};
//!
//! let runner = SystemRunner::new();
//! if let Some(git) = runner.which("git") {
//!     let output = runner.output(&git, &["--version".to_string()], std::path::Path::new("."));
//!     println!("{:?}", output.map(|o| o.stdout));
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of running a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with status 0.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// A successful run printing `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run printing `stderr`.
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// stdout followed by stderr. Some tools print their version on stderr.
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Finds and runs external tools.
pub trait ProcessRunner {
    /// Resolve a tool name to an executable path.
    fn which(&self, tool: &str) -> Option<PathBuf>;

    /// Run `program` with `args` in `cwd`. `None` means the process could
    /// not be started.
    fn output(&self, program: &Path, args: &[String], cwd: &Path) -> Option<ProcessOutput>;
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in candidate_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![format!("{}.exe", tool), format!("{}.cmd", tool), tool.to_string()]
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Runs real processes, looking tools up on PATH.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    path: Vec<PathBuf>,
}

impl SystemRunner {
    /// Use the current process's PATH.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Use explicit PATH entries.
    pub fn with_path(path: Vec<PathBuf>) -> Self {
        Self { path }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemRunner {
    fn which(&self, tool: &str) -> Option<PathBuf> {
        resolve_tool_path(tool, &self.path)
    }

    fn output(&self, program: &Path, args: &[String], cwd: &Path) -> Option<ProcessOutput> {
        match Command::new(program).args(args).current_dir(cwd).output() {
            Ok(output) => Some(ProcessOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }),
            Err(err) => {
                tracing::debug!(program = %program.display(), error = %err, "failed to run tool");
                None
            }
        }
    }
}
