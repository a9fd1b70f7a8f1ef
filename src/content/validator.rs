//! Content validator.
//!
//! Walks the content root in file-name order, runs the per-file checks on
//! every markdown file, then resolves the collected root-anchored links
//! against the files found. Broken links are appended after the per-file
//! diagnostics, in the order the links were found.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ContentPolicy;
use crate::error::SiteCheckError;
use crate::lint::{
    LintDiagnostic, Location, RuleId, RuleRegistry, ScanStats, Severity, ValidationReport,
};

use super::file::ContentFile;
use super::links::{is_root_anchored, is_templated, truncate_display, LinkGraph, LinkIndex, LinkKind};

/// Report heading for content runs.
pub const CONTENT_REPORT_TITLE: &str = "Content validation";

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// A content run: the report plus the resolved link graph.
#[derive(Debug, Clone)]
pub struct ContentScan {
    pub report: ValidationReport,
    pub graph: LinkGraph,
}

/// A root-anchored link waiting for resolution.
struct PendingLink {
    file: PathBuf,
    line: usize,
    target: String,
}

/// Checks a tree of markdown files.
pub struct ContentValidator {
    policy: ContentPolicy,
    registry: RuleRegistry<ContentFile>,
    project_root: Option<PathBuf>,
}

impl ContentValidator {
    /// Create a validator with the built-in checks.
    pub fn new(policy: ContentPolicy) -> Self {
        let registry = RuleRegistry::<ContentFile>::with_builtins(&policy);
        Self {
            policy,
            registry,
            project_root: None,
        }
    }

    /// Resolve asset directories against `root` instead of the content
    /// root's parent.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// The per-file checks this validator runs.
    pub fn registry(&self) -> &RuleRegistry<ContentFile> {
        &self.registry
    }

    /// Validate the tree under `root`.
    pub fn validate(&self, root: &Path) -> ValidationReport {
        self.scan(root).report
    }

    /// Validate the tree under `root`, keeping the link graph.
    pub fn scan(&self, root: &Path) -> ContentScan {
        info!(root = %root.display(), "validating content");
        let mut report = ValidationReport::new(CONTENT_REPORT_TITLE, root.display().to_string());

        if !root.is_dir() {
            report.push(
                LintDiagnostic::new(
                    RuleId::new("content-root"),
                    Severity::Error,
                    format!("Content directory not found: {}", root.display()),
                )
                .with_location(Location::file(root)),
            );
            return ContentScan {
                report,
                graph: LinkGraph::default(),
            };
        }

        let mut stats = ScanStats::default();
        let mut index = LinkIndex::new(self.policy.index_files.clone());
        let mut pending = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "failed to walk content directory");
                    let path = err.path().unwrap_or(root).to_path_buf();
                    report.push(read_failure(&path, &err.to_string()));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if let Ok(relative) = path.strip_prefix(root) {
                index.insert_content(relative);
            }
            if !is_markdown(path) {
                continue;
            }

            let file = match ContentFile::read(path) {
                Ok(file) => file,
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "unreadable content file");
                    let message = match err {
                        SiteCheckError::Io(io) => io.to_string(),
                        other => other.to_string(),
                    };
                    report.push(read_failure(path, &message));
                    continue;
                }
            };

            stats.files += 1;
            for link in file.links() {
                if link.is_image {
                    stats.images += 1;
                    continue;
                }
                match link.kind() {
                    LinkKind::External => stats.external_links += 1,
                    LinkKind::Internal => {
                        stats.internal_links += 1;
                        if is_root_anchored(&link.target) && !is_templated(&link.target) {
                            pending.push(PendingLink {
                                file: path.to_path_buf(),
                                line: link.line,
                                target: link.target.clone(),
                            });
                        }
                    }
                    LinkKind::Skipped => {}
                }
            }

            report.extend(self.registry.run(&file));
        }

        for asset_root in self.asset_roots(root) {
            index_assets(&mut index, &asset_root);
        }
        debug!(files = index.len(), links = pending.len(), "resolving internal links");

        let mut graph = LinkGraph::default();
        for link in pending {
            if !graph.resolve(&index, &link.target) {
                report.push(
                    LintDiagnostic::new(
                        RuleId::new("broken-link"),
                        Severity::Error,
                        format!(
                            "Broken internal link: {}",
                            truncate_display(&link.target, self.policy.max_url_display)
                        ),
                    )
                    .with_location(Location::line(link.file, link.line)),
                );
            }
        }

        stats.broken_targets = graph.broken().count();
        report.stats = Some(stats);
        ContentScan { report, graph }
    }

    fn asset_roots(&self, content_root: &Path) -> Vec<PathBuf> {
        let base = match &self.project_root {
            Some(root) => root.clone(),
            None => content_root
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.policy
            .asset_dirs
            .iter()
            .map(|dir| base.join(dir))
            .filter(|dir| dir.is_dir())
            .collect()
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

fn index_assets(index: &mut LinkIndex, asset_root: &Path) {
    for entry in WalkDir::new(asset_root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(asset_root) {
            index.insert_asset(relative);
        }
    }
}

fn read_failure(path: &Path, message: &str) -> LintDiagnostic {
    LintDiagnostic::new(
        RuleId::new("content-read"),
        Severity::Error,
        format!("Could not read file: {}", message),
    )
    .with_location(Location::file(path))
}
