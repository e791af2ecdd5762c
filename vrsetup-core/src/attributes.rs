//! Key/value parser for per-tile `.vrsetup` files
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Attribute name to raw value, as read from one tile file.
///
/// Keys are the first whitespace-delimited token of a line; values are the
/// remaining tokens rejoined with single spaces. Later lines overwrite
/// earlier ones with the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse raw file contents, checking each line decodes as UTF-8.
    /// Whitespace-only lines are skipped.
    pub fn parse_bytes(path: &Path, data: &[u8]) -> Result<Self> {
        let mut map = Self::new();
        for (index, raw) in data.split(|b| *b == b'\n').enumerate() {
            let line = std::str::from_utf8(raw).map_err(|_| Error::MalformedLine {
                path: path.to_path_buf(),
                line: index + 1,
            })?;
            if let Some((key, value)) = parse_line(line) {
                map.insert(key, value);
            }
        }
        Ok(map)
    }

    /// Read and parse a tile file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| Error::from_io(path, e))?;
        let map = Self::parse_bytes(path, &data)?;
        tracing::debug!(path = %path.display(), attributes = map.len(), "Parsed tile file");
        Ok(map)
    }

    /// Render one `key value` line per entry, in key order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push_str(key);
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl FromIterator<(String, String)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Split a line into its key and the normalized remainder.
/// Returns `None` for lines with no tokens.
pub fn parse_line(line: &str) -> Option<(&str, String)> {
    let mut tokens = line.split_whitespace();
    let key = tokens.next()?;
    let value = tokens.collect::<Vec<_>>().join(" ");
    Some((key, value))
}
