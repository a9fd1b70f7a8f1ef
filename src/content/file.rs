//! Markdown content files.
//!
//! A [`ContentFile`] is scanned once when it is created: the frontmatter
//! block is split off and parsed, fenced code is skipped, and headings and
//! links are collected from the remaining lines. Rules then read those
//! results instead of rescanning.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::links::{extract_links, Link};
use crate::error::Result;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(#{1,6})\s+(.+?)\s*#*\s*$").expect("HEADING_REGEX must compile"));

/// Frontmatter syntax, chosen by the opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterKind {
    /// `---` delimited YAML.
    Yaml,
    /// `+++` delimited TOML.
    Toml,
}

impl FrontmatterKind {
    fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// The frontmatter block of a file.
#[derive(Debug, Clone, PartialEq)]
pub enum Frontmatter {
    /// The file does not start with a delimiter.
    Missing,
    /// An opening delimiter with no closing one.
    Unterminated { kind: FrontmatterKind },
    /// A closed block that failed to parse as a mapping.
    Invalid {
        kind: FrontmatterKind,
        message: String,
    },
    /// A closed, parsed block. `end_line` is the closing delimiter's line.
    Parsed {
        kind: FrontmatterKind,
        fields: BTreeMap<String, Value>,
        end_line: usize,
    },
}

impl Frontmatter {
    /// Parsed fields, if any.
    pub fn fields(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Parsed { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// A field, matching keys case-insensitively.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }
}

/// A markdown heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub line: usize,
    /// 1 through 6.
    pub level: usize,
    pub text: String,
}

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence {
    /// Line of the opening fence.
    pub line: usize,
    /// First word of the info string.
    pub language: Option<String>,
    /// Whether a closing fence was found.
    pub closed: bool,
}

/// A scanned markdown document.
#[derive(Debug, Clone)]
pub struct ContentFile {
    path: PathBuf,
    frontmatter: Frontmatter,
    headings: Vec<Heading>,
    fences: Vec<CodeFence>,
    links: Vec<Link>,
}

impl ContentFile {
    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file can't be read or isn't valid UTF-8.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "file is not valid UTF-8"))?;
        Ok(Self::from_text(path, &text))
    }

    /// Scan markdown text attributed to `path`.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let path = path.into();
        let lines: Vec<&str> = text.lines().collect();

        let (frontmatter, body_start) = split_frontmatter(&lines);

        let mut headings = Vec::new();
        let mut fences: Vec<CodeFence> = Vec::new();
        let mut links = Vec::new();
        let mut open: Option<(char, usize)> = None;

        for (index, line) in lines.iter().enumerate().skip(body_start) {
            let number = index + 1;

            if let Some((fence_char, fence_len)) = open {
                let closes = fence_marker(line)
                    .is_some_and(|(c, n, info)| c == fence_char && n >= fence_len && info.is_empty());
                if closes {
                    if let Some(fence) = fences.last_mut() {
                        fence.closed = true;
                    }
                    open = None;
                }
                continue;
            }

            if let Some((fence_char, fence_len, info)) = fence_marker(line) {
                fences.push(CodeFence {
                    line: number,
                    language: info.split_whitespace().next().map(str::to_string),
                    closed: false,
                });
                open = Some((fence_char, fence_len));
                continue;
            }

            if let Some(caps) = HEADING_REGEX.captures(line) {
                headings.push(Heading {
                    line: number,
                    level: caps[1].len(),
                    text: caps[2].to_string(),
                });
            }
            links.extend(extract_links(line, number));
        }

        Self {
            path,
            frontmatter,
            headings,
            fences,
            links,
        }
    }

    /// Path used when reporting on this file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name, if the path has one.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn frontmatter(&self) -> &Frontmatter {
        &self.frontmatter
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn fences(&self) -> &[CodeFence] {
        &self.fences
    }

    /// Links and images outside frontmatter and code, in document order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

/// Split off the frontmatter block, returning it and the index of the first
/// body line.
fn split_frontmatter(lines: &[&str]) -> (Frontmatter, usize) {
    let kind = match lines.first().map(|l| l.trim_start_matches('\u{feff}').trim_end()) {
        Some("---") => FrontmatterKind::Yaml,
        Some("+++") => FrontmatterKind::Toml,
        _ => return (Frontmatter::Missing, 0),
    };

    let Some(close) = lines
        .iter()
        .skip(1)
        .position(|l| l.trim_end() == kind.delimiter())
        .map(|i| i + 1)
    else {
        return (Frontmatter::Unterminated { kind }, 1);
    };

    let block = lines[1..close].join("\n");
    let frontmatter = match parse_block(kind, &block) {
        Ok(fields) => Frontmatter::Parsed {
            kind,
            fields,
            end_line: close + 1,
        },
        Err(message) => Frontmatter::Invalid { kind, message },
    };
    (frontmatter, close + 1)
}

fn parse_block(
    kind: FrontmatterKind,
    block: &str,
) -> std::result::Result<BTreeMap<String, Value>, String> {
    if block.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let value: Value = match kind {
        FrontmatterKind::Yaml => serde_yaml::from_str(block).map_err(|e| e.to_string())?,
        FrontmatterKind::Toml => toml::from_str(block).map_err(|e| e.to_string())?,
    };
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Null => Ok(BTreeMap::new()),
        _ => Err("frontmatter is not a key-value mapping".to_string()),
    }
}

/// A fence line's character, run length, and info string.
fn fence_marker(line: &str) -> Option<(char, usize, &str)> {
    let trimmed = line.trim_start();
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let fence_char = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == fence_char).count();
    if len < 3 {
        return None;
    }
    let info = trimmed[len..].trim();
    if fence_char == '`' && info.contains('`') {
        return None;
    }
    Some((fence_char, len, info))
}
