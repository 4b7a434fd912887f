//! Account and project extraction from remote URLs

use regex::Regex;

use crate::error::{Error, Result};

/// Matches the trailing `<sep><account>/<project>.git` of a remote URL,
/// where `<sep>` is `:` (scp-style) or `/` (URL-style).
const REMOTE_URL_PATTERN: &str = r"[:/]([^:/]*)/([^/]*)\.git$";

/// The owner and name of a hosted repository, e.g. `oalders` / `test-repo`.
///
/// Both parts are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubIdentity {
    account: String,
    project: String,
}

impl GithubIdentity {
    /// Extract the identity from a remote URL.
    ///
    /// ```
    /// use dist_github_meta::git::GithubIdentity;
    ///
    /// let id = GithubIdentity::from_url("git@github.com:oalders/test-repo.git").unwrap();
    /// assert_eq!(id.account(), "oalders");
    /// assert_eq!(id.project(), "test-repo");
    /// ```
    pub fn from_url(url: &str) -> Result<Self> {
        let trimmed = url.trim();
        let pattern = Regex::new(REMOTE_URL_PATTERN)?;

        let captures = pattern
            .captures(trimmed)
            .ok_or_else(|| Error::UnparseableUrl {
                url: url.to_string(),
            })?;

        let account = captures.get(1).map_or("", |m| m.as_str());
        let project = captures.get(2).map_or("", |m| m.as_str());

        if account.is_empty() {
            return Err(Error::EmptyAccount {
                url: url.to_string(),
            });
        }
        if project.is_empty() {
            return Err(Error::EmptyProject {
                url: url.to_string(),
            });
        }

        Ok(Self {
            account: account.to_string(),
            project: project.to_string(),
        })
    }

    /// The repository owner.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// The repository name, without the `.git` suffix.
    pub fn project(&self) -> &str {
        &self.project
    }
}
