//! Markdown link extraction and internal link resolution.
//!
//! Extraction is line based: a regular expression over each text line,
//! after inline code spans are blanked out. Reference-style links are not
//! recognized.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Inline links and images: `[text](target "title")` / `![alt](src)`.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(!?)\[([^\[\]]*)\]\(\s*<?([^)\s>]*)>?(?:\s+"[^"]*")?\s*\)"#)
        .expect("LINK_REGEX must compile")
});

/// Inline code spans.
static CODE_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`+[^`]*`+").expect("CODE_SPAN_REGEX must compile"));

/// A markdown link or image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Line (1-indexed) the link appears on.
    pub line: usize,
    /// Link text or image alt text, trimmed.
    pub text: String,
    /// Raw target as written.
    pub target: String,
    /// Whether this is an image (`![...]`).
    pub is_image: bool,
}

impl Link {
    /// Classify this link's target.
    pub fn kind(&self) -> LinkKind {
        classify(&self.target)
    }
}

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A page or file inside the site.
    Internal,
    /// Another origin (`http://`, `https://`, `//`).
    External,
    /// Anchors, mail, telephone and other schemes.
    Skipped,
}

/// Extract links and images from one text line.
pub fn extract_links(line: &str, number: usize) -> Vec<Link> {
    let cleaned = CODE_SPAN_REGEX.replace_all(line, |caps: &regex::Captures<'_>| {
        " ".repeat(caps[0].len())
    });

    LINK_REGEX
        .captures_iter(&cleaned)
        .map(|caps| Link {
            line: number,
            is_image: &caps[1] == "!",
            text: caps[2].trim().to_string(),
            target: caps[3].to_string(),
        })
        .collect()
}

/// Classify a link target.
pub fn classify(target: &str) -> LinkKind {
    let lower = target.trim().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//") {
        return LinkKind::External;
    }
    if lower.starts_with('#') {
        return LinkKind::Skipped;
    }
    if has_scheme(&lower) {
        return LinkKind::Skipped;
    }
    LinkKind::Internal
}

/// `mailto:`, `tel:`, `ftp:` and friends. Template markers are not a scheme.
fn has_scheme(target: &str) -> bool {
    if target.contains("{{") {
        return false;
    }
    match target.find(':') {
        Some(colon) => {
            let scheme = &target[..colon];
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Whether a target contains a template expression and can't be resolved.
pub fn is_templated(target: &str) -> bool {
    target.contains("{{")
}

/// Whether an internal target is anchored at the site root.
pub fn is_root_anchored(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//")
}

/// Shorten a URL for display, appending `...` when cut.
pub fn truncate_display(url: &str, max: usize) -> String {
    if url.chars().count() <= max {
        url.to_string()
    } else {
        let cut: String = url.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Strip query and fragment, then leading/trailing slashes.
pub fn normalize_target(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    target[..end].trim_matches('/')
}

/// The files a root-anchored link may resolve to.
///
/// Content paths are stored relative to the content root, asset paths
/// relative to their asset directory, both with `/` separators.
#[derive(Debug, Clone, Default)]
pub struct LinkIndex {
    content: BTreeSet<String>,
    assets: BTreeSet<String>,
    index_files: Vec<String>,
}

impl LinkIndex {
    /// Create an empty index using the given directory-index file names.
    pub fn new(index_files: Vec<String>) -> Self {
        Self {
            index_files,
            ..Self::default()
        }
    }

    /// Record a file found under the content root.
    pub fn insert_content(&mut self, relative: &Path) {
        self.content.insert(to_slash(relative));
    }

    /// Record a file found under an asset directory.
    pub fn insert_asset(&mut self, relative: &Path) {
        self.assets.insert(to_slash(relative));
    }

    /// Number of known files.
    pub fn len(&self) -> usize {
        self.content.len() + self.assets.len()
    }

    /// Whether no files are known.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a root-anchored target.
    ///
    /// Tries, in order: the exact file, `<path>.md`, each index file inside
    /// `<path>/`, and the exact file under an asset directory.
    pub fn resolves(&self, target: &str) -> bool {
        let path = normalize_target(target);

        if path.is_empty() {
            return self.index_files.iter().any(|index| self.content.contains(index));
        }
        if self.content.contains(path) || self.content.contains(&format!("{}.md", path)) {
            return true;
        }
        if self
            .index_files
            .iter()
            .any(|index| self.content.contains(&format!("{}/{}", path, index)))
        {
            return true;
        }
        self.assets.contains(path)
    }
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Internal link targets mapped to whether they resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    targets: BTreeMap<String, bool>,
}

impl LinkGraph {
    /// Resolve `target` against `index`, memoizing the result.
    pub fn resolve(&mut self, index: &LinkIndex, target: &str) -> bool {
        *self
            .targets
            .entry(target.to_string())
            .or_insert_with(|| index.resolves(target))
    }

    /// Whether a target was seen and resolved.
    pub fn get(&self, target: &str) -> Option<bool> {
        self.targets.get(target).copied()
    }

    /// Targets that did not resolve, sorted.
    pub fn broken(&self) -> impl Iterator<Item = &str> {
        self.targets
            .iter()
            .filter(|(_, ok)| !**ok)
            .map(|(target, _)| target.as_str())
    }

    /// Number of distinct targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets were recorded.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
