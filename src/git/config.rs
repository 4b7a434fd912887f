//! Git configuration file parsing
//!
//! A small reader for the `.git/config` format. It understands just enough
//! of git's INI dialect to answer "what is `remote.<name>.url`?" correctly:
//!
//! - Section headers: `[core]`, `[remote "origin"]`, and the legacy
//!   `[remote.origin]` form
//! - Key-value pairs: `key = value`, with quoted values and backslash escapes
//! - Bare keys (`key` with no `=`), which git treats as boolean `true`
//! - Comments: lines starting with `#` or `;`, and trailing comments after a
//!   value
//!
//! Section and key names are case-insensitive. Subsection names keep their
//! case, except in the legacy dotted form where git lowercases them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Identifies a section: `("remote", Some("origin"))` for `[remote "origin"]`.
type SectionKey = (String, Option<String>);

/// Parsed git configuration: section -> key -> value.
///
/// A repeated section header adds to the same section. A repeated key keeps
/// the last value, which is how git resolves single-valued keys.
#[derive(Clone, Debug, Default)]
pub struct GitConfig {
    sections: HashMap<SectionKey, HashMap<String, String>>,
}

impl GitConfig {
    /// Parse git configuration text.
    pub fn parse(content: &str) -> Self {
        let mut config = GitConfig::default();
        let mut current: Option<SectionKey> = None;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let entry = if trimmed.starts_with('[') {
                let Some(close) = find_header_end(trimmed) else {
                    debug!("Skipping malformed section header: {}", trimmed);
                    continue;
                };
                let key = parse_section_header(&trimmed[1..close]);
                config.sections.entry(key.clone()).or_default();
                current = Some(key);
                trimmed[close + 1..].trim()
            } else {
                trimmed
            };

            if entry.is_empty() || entry.starts_with('#') || entry.starts_with(';') {
                continue;
            }

            let Some(section) = current.as_ref() else {
                debug!("Ignoring entry outside of any section: {}", entry);
                continue;
            };

            let (key, value) = match entry.find('=') {
                Some(pos) => (entry[..pos].trim(), parse_value(&entry[pos + 1..])),
                None => (entry, "true".to_string()),
            };

            config
                .sections
                .entry(section.clone())
                .or_default()
                .insert(key.to_ascii_lowercase(), value);
        }

        config
    }

    /// Read and parse a git configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::MissingConfigFile {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        Ok(Self::parse(&content))
    }

    /// Returns true if the given section (and subsection) was declared.
    pub fn has_section(&self, section: &str, subsection: Option<&str>) -> bool {
        self.sections.contains_key(&section_key(section, subsection))
    }

    /// Look up a single value.
    pub fn get(&self, section: &str, subsection: Option<&str>, key: &str) -> Option<&str> {
        self.sections
            .get(&section_key(section, subsection))?
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Names of every `[remote "..."]` section, sorted.
    pub fn remote_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .sections
            .keys()
            .filter(|(name, _)| name == "remote")
            .filter_map(|(_, sub)| sub.as_deref())
            .collect();
        names.sort_unstable();
        names
    }
}

fn section_key(section: &str, subsection: Option<&str>) -> SectionKey {
    (section.to_ascii_lowercase(), subsection.map(str::to_string))
}

/// Position of the `]` that closes a section header, skipping any `]` that
/// appears inside a quoted subsection name.
fn find_header_end(line: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ']' if !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

fn parse_section_header(header: &str) -> SectionKey {
    let header = header.trim();

    if let Some(quote) = header.find('"') {
        let name = header[..quote].trim().to_ascii_lowercase();
        let rest = &header[quote + 1..];
        let rest = rest.strip_suffix('"').unwrap_or(rest);

        let mut subsection = String::with_capacity(rest.len());
        let mut chars = rest.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    subsection.push(next);
                }
            } else {
                subsection.push(c);
            }
        }
        return (name, Some(subsection));
    }

    match header.split_once('.') {
        Some((name, sub)) => (name.to_ascii_lowercase(), Some(sub.to_ascii_lowercase())),
        None => (header.to_ascii_lowercase(), None),
    }
}

/// Decode the right-hand side of `key = value`.
///
/// Double quotes group text (and keep its whitespace), backslash escapes
/// `\\`, `\"`, `\n`, `\t` and `\b` are decoded, and an unquoted `#` or `;`
/// starts a comment. Unquoted whitespace at either end is dropped.
fn parse_value(raw: &str) -> String {
    let mut value = String::new();
    let mut pending_space = String::new();
    let mut in_quotes = false;
    let mut chars = raw.trim_start().chars();

    while let Some(c) = chars.next() {
        let decoded = match c {
            '"' => {
                in_quotes = !in_quotes;
                continue;
            }
            '#' | ';' if !in_quotes => break,
            '\\' => match chars.next() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some('b') => '\u{8}',
                Some(other) => other,
                None => break,
            },
            c if c.is_whitespace() && !in_quotes => {
                pending_space.push(c);
                continue;
            }
            c => c,
        };

        value.push_str(&pending_space);
        pending_space.clear();
        value.push(decoded);
    }

    value
}
