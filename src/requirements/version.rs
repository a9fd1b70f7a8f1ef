//! Tool version parsing and comparison.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// A `major.minor[.patch]` version. A missing patch is zero.
///
/// Ordering compares component by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Find the first version number in a tool's output.
    ///
    /// ```
    /// use sitecheck::requirements::Version;
    ///
    /// let v = Version::extract("go version go1.21.3 linux/amd64").unwrap();
    /// assert_eq!(v, Version::new(1, 21, 3));
    /// ```
    pub fn extract(text: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(text)?;
        let component = |i: usize| -> Option<u64> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };
        Some(Self::new(component(1)?, component(2)?, component(3)?))
    }

    /// Whether this version is at least `minimum`.
    pub fn meets(&self, minimum: &Version) -> bool {
        self >= minimum
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
