//! # Template Formatting
//!
//! Renders the printf-style templates used for the metadata fields. A
//! template is free-form text in which a few placeholder codes are replaced:
//!
//! | code | value |
//! |------|-------|
//! | `%a` | repository account |
//! | `%r` | repository project |
//! | `%N` | distribution name |
//!
//! `%N` accepts a transform in braces, e.g. `%{lc}N`. See [`Transform`] for
//! the available names. Any other `%x` sequence is copied through unchanged.
//!
//! ## Example
//!
//! ```
//! use dist_github_meta::template::{format, TemplateContext};
//!
//! let ctx = TemplateContext::new("oalders", "test-repo", "Test-Repo");
//! assert_eq!(
//!     format("https://github.com/%a/%r/issues?dist=%{lc}N", &ctx).unwrap(),
//!     "https://github.com/oalders/test-repo/issues?dist=test-repo"
//! );
//! ```

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::git::GithubIdentity;

/// Values available to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateContext<'a> {
    pub account: &'a str,
    pub project: &'a str,
    pub name: &'a str,
}

impl<'a> TemplateContext<'a> {
    pub fn new(account: &'a str, project: &'a str, name: &'a str) -> Self {
        Self {
            account,
            project,
            name,
        }
    }

    /// Build a context from a resolved identity and a distribution name.
    pub fn from_identity(identity: &'a GithubIdentity, name: &'a str) -> Self {
        Self::new(identity.account(), identity.project(), name)
    }
}

/// A case or format conversion applied to the distribution name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// No braces, or `%{}N`: the name unchanged.
    Identity,
    /// `lc`: lowercase.
    Lowercase,
    /// `uc`: uppercase.
    Uppercase,
    /// `deb`: the Debian package name, `lib<lowercased name>-perl`.
    Debian,
}

impl Transform {
    pub fn apply(self, value: &str) -> String {
        match self {
            Transform::Identity => value.to_string(),
            Transform::Lowercase => value.to_lowercase(),
            Transform::Uppercase => value.to_uppercase(),
            Transform::Debian => format!("lib{}-perl", value.to_lowercase()),
        }
    }
}

impl FromStr for Transform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" => Ok(Transform::Identity),
            "lc" => Ok(Transform::Lowercase),
            "uc" => Ok(Transform::Uppercase),
            "deb" => Ok(Transform::Debian),
            other => Err(other.to_string()),
        }
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'t> {
    Literal(&'t str),
    Account,
    Project,
    Name(Transform),
}

/// Render `template` with the values from `ctx`.
///
/// Fails only when `%{...}N` names a transform that does not exist.
pub fn format(template: &str, ctx: &TemplateContext<'_>) -> Result<String> {
    let segments = parse(template)?;

    let mut output = String::with_capacity(template.len() + ctx.name.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Account => output.push_str(ctx.account),
            Segment::Project => output.push_str(ctx.project),
            Segment::Name(transform) => output.push_str(&transform.apply(ctx.name)),
        }
    }
    Ok(output)
}

/// Split a template into literal text and placeholders.
fn parse(template: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('%') {
        let start = pos + offset;
        let Some((segment, end)) = parse_placeholder(template, start)? else {
            // Not a recognized placeholder: keep the '%' as text and move on.
            pos = start + 1;
            continue;
        };

        if literal_start < start {
            segments.push(Segment::Literal(&template[literal_start..start]));
        }
        segments.push(segment);
        pos = end;
        literal_start = end;
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    Ok(segments)
}

/// Parse the placeholder whose `%` is at `start`. Returns the segment and the
/// byte offset just past it, or `None` if the text there is not a
/// recognized placeholder.
fn parse_placeholder(template: &str, start: usize) -> Result<Option<(Segment<'_>, usize)>> {
    let rest = &template[start + 1..];

    let (argument, code_at) = match rest.strip_prefix('{') {
        Some(braced) => match braced.find('}') {
            Some(close) => (Some(&braced[..close]), close + 2),
            None => return Ok(None),
        },
        None => (None, 0),
    };

    let Some(code) = rest[code_at..].chars().next() else {
        return Ok(None);
    };
    let end = start + 1 + code_at + code.len_utf8();

    let segment = match (code, argument) {
        ('a', _) => Segment::Account,
        ('r', _) => Segment::Project,
        ('N', argument) => {
            let transform =
                Transform::from_str(argument.unwrap_or("")).map_err(|transform| {
                    Error::UnknownTransform {
                        transform,
                        template: template.to_string(),
                    }
                })?;
            Segment::Name(transform)
        }
        _ => return Ok(None),
    };

    Ok(Some((segment, end)))
}
