//! Source locations.
//!
//! A [`Location`] attributes a diagnostic to a file and, when known, a
//! 1-indexed line.

use std::fmt;
use std::path::PathBuf;

/// Where a diagnostic applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// File path, as it should be displayed.
    pub file: PathBuf,
    /// Line number (1-indexed), if the issue is tied to a line.
    pub line: Option<usize>,
}

impl Location {
    /// A location covering a whole file.
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// A location on a single line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file.display(), line),
            None => write!(f, "{}", self.file.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_constructor() {
        let loc = Location::line("docs/guide.md", 10);

        assert_eq!(loc.line, Some(10));
        assert_eq!(loc.file, PathBuf::from("docs/guide.md"));
    }

    #[test]
    fn file_constructor_has_no_line() {
        let loc = Location::file("config.toml");
        assert!(loc.line.is_none());
    }

    #[test]
    fn display_with_and_without_line() {
        assert_eq!(Location::line("a.md", 3).to_string(), "a.md:3");
        assert_eq!(Location::file("a.md").to_string(), "a.md");
    }
}
