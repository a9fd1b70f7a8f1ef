//! Site configuration document.
//!
//! The generator's configuration is read as TOML, YAML, or JSON (chosen by
//! file extension) and normalized to a [`serde_json::Value`]. Keys are
//! matched case-insensitively, as the generator does.

use crate::error::{Result, SiteCheckError};
use regex::Regex;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate file names, in lookup order, for the default config path.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "hugo.toml",
    "config.toml",
    "hugo.yaml",
    "hugo.yml",
    "config.yaml",
    "config.yml",
    "hugo.json",
    "config.json",
];

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a path's extension. Unknown extensions are
    /// read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// One entry of a site menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// Identifier, falling back to name, pageRef, then url.
    pub identifier: String,
    /// Ordering weight, if set.
    pub weight: Option<i64>,
    /// Line of the entry's table header, when it can be found.
    pub line: Option<usize>,
}

/// A named menu (`menu.main`, `menu.footer`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub name: String,
    pub entries: Vec<MenuEntry>,
}

/// A parsed site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    path: PathBuf,
    raw: String,
    root: Value,
}

impl SiteConfig {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist and
    /// `ConfigParseError` if it can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SiteCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|e| SiteCheckError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&raw, ConfigFormat::from_path(path), path)
    }

    /// Parse config text in the given format.
    pub fn parse(raw: &str, format: ConfigFormat, path: &Path) -> Result<Self> {
        let parse_error = |message: String| SiteCheckError::ConfigParseError {
            path: path.to_path_buf(),
            message,
        };

        let root: Value = match format {
            ConfigFormat::Toml => toml::from_str(raw).map_err(|e| parse_error(e.to_string()))?,
            ConfigFormat::Yaml => {
                serde_yaml::from_str(raw).map_err(|e| parse_error(e.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::from_str(raw).map_err(|e| parse_error(e.to_string()))?
            }
        };

        let root = match root {
            Value::Object(_) => root,
            // An empty YAML document parses as null
            Value::Null => Value::Object(Map::new()),
            _ => return Err(parse_error("top level is not a mapping".to_string())),
        };

        Ok(Self {
            path: path.to_path_buf(),
            raw: raw.to_string(),
            root,
        })
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The normalized document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up a dotted key path, case-insensitively per segment.
    pub fn get(&self, dotted: &str) -> Option<&Value> {
        dotted
            .split('.')
            .try_fold(&self.root, |value, segment| lookup_ci(value, segment))
    }

    /// A non-empty string at a key path.
    pub fn get_str(&self, dotted: &str) -> Option<&str> {
        self.get(dotted)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// A boolean at a key path.
    pub fn get_bool(&self, dotted: &str) -> Option<bool> {
        self.get(dotted).and_then(Value::as_bool)
    }

    /// Whether a key path holds a meaningful value (not null, not an empty
    /// string).
    pub fn has_value(&self, dotted: &str) -> bool {
        match self.get(dotted) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// First line (1-indexed) where `key` is assigned, found textually.
    pub fn line_of(&self, key: &str) -> Option<usize> {
        let pattern = format!(r#"(?i)^\s*["']?{}["']?\s*[=:]"#, regex::escape(key));
        let re = Regex::new(&pattern).ok()?;
        self.raw
            .lines()
            .position(|line| re.is_match(line))
            .map(|i| i + 1)
    }

    /// Every string value anywhere in the document.
    pub fn string_values(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_strings(&self.root, &mut out);
        out
    }

    /// All menus under `menu` or `menus`, sorted by menu name.
    pub fn menus(&self) -> Vec<Menu> {
        let mut menus = Vec::new();
        for key in ["menu", "menus"] {
            let Some(Value::Object(map)) = lookup_ci(&self.root, key) else {
                continue;
            };
            for (name, entries) in map {
                let Value::Array(items) = entries else {
                    continue;
                };
                let lines = self.menu_header_lines(name);
                let entries = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| MenuEntry {
                        identifier: menu_identifier(item, i),
                        weight: lookup_ci(item, "weight").and_then(Value::as_i64),
                        line: lines.get(i).copied(),
                    })
                    .collect();
                menus.push(Menu {
                    name: name.clone(),
                    entries,
                });
            }
        }
        menus.sort_by(|a, b| a.name.cmp(&b.name));
        menus
    }

    /// Lines of `[[menu.<name>]]` table headers, in document order.
    fn menu_header_lines(&self, name: &str) -> Vec<usize> {
        let pattern = format!(
            r#"(?i)^\s*\[\[\s*menus?\.["']?{}["']?\s*\]\]"#,
            regex::escape(name)
        );
        let Ok(re) = Regex::new(&pattern) else {
            return Vec::new();
        };
        self.raw
            .lines()
            .enumerate()
            .filter(|(_, line)| re.is_match(line))
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// Case-insensitive key lookup on an object value.
fn lookup_ci<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let map = value.as_object()?;
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn menu_identifier(item: &Value, index: usize) -> String {
    ["identifier", "name", "pageRef", "url"]
        .iter()
        .find_map(|key| lookup_ci(item, key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index + 1))
}

fn collect_strings<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) => out.push(s),
        Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        _ => {}
    }
}

/// Default config path for a project root: the first existing candidate,
/// else `config.toml`.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
        .unwrap_or_else(|| project_root.join("config.toml"))
}
