//! # Git Remote Resolution
//!
//! This module turns the local git checkout into a [`GithubIdentity`]. It
//! never runs `git` and never touches the network: it reads `.git/config`
//! once, looks up `remote "<name>".url`, and extracts the account and project
//! from that URL.
//!
//! ## Design
//!
//! Resolution sits behind the [`IdentitySource`] trait so that callers (and
//! tests) can swap the filesystem-backed [`ConfigResolver`] for an in-memory
//! source.
//!
//! Locating the configuration follows git's own layout rules:
//!
//! - `<root>/.git/` is a directory: read `<root>/.git/config`.
//! - `<root>/.git` is a file (worktrees, submodules): follow its
//!   `gitdir: <path>` line, then the `commondir` file if the target has one.

pub mod config;
pub mod identity;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

pub use config::GitConfig;
pub use identity::GithubIdentity;

/// The remote consulted when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Trait for identity resolution - allows mocking in tests
pub trait IdentitySource {
    /// Resolve the account and project of the named remote.
    fn resolve(&self, remote: &str) -> Result<GithubIdentity>;
}

/// Resolves identities from the git configuration of a checkout on disk.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    root: PathBuf,
}

impl ConfigResolver {
    /// Create a resolver for the checkout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a resolver for the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// The checkout root this resolver reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the configuration file that [`resolve`](Self::resolve) reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        locate_config(&self.root)
    }

    /// The raw `url` of the named remote.
    pub fn remote_url(&self, remote: &str) -> Result<String> {
        let path = self.config_path()?;
        debug!("Reading git configuration from {}", path.display());
        let config = GitConfig::from_file(&path)?;

        if !config.has_section("remote", Some(remote)) {
            debug!(
                "Remote '{}' not found; configured remotes: {:?}",
                remote,
                config.remote_names()
            );
            return Err(Error::MissingRemote {
                remote: remote.to_string(),
                path,
            });
        }

        match config.get("remote", Some(remote), "url") {
            Some(url) if !url.trim().is_empty() => Ok(url.to_string()),
            _ => Err(Error::MissingUrl {
                remote: remote.to_string(),
            }),
        }
    }
}

impl IdentitySource for ConfigResolver {
    fn resolve(&self, remote: &str) -> Result<GithubIdentity> {
        let url = self.remote_url(remote)?;
        let identity = GithubIdentity::from_url(&url)?;
        debug!(
            "Remote '{}' ({}) resolved to {}/{}",
            remote,
            url,
            identity.account(),
            identity.project()
        );
        Ok(identity)
    }
}

/// Find the git configuration file for the checkout rooted at `root`.
pub fn locate_config(root: &Path) -> Result<PathBuf> {
    let dot_git = root.join(".git");

    let git_dir = if dot_git.is_dir() {
        dot_git
    } else if dot_git.is_file() {
        let dir = read_gitdir_file(&dot_git, root)?;
        debug!("{} points to {}", dot_git.display(), dir.display());
        dir
    } else {
        return Err(Error::MissingConfigFile {
            path: dot_git.join("config"),
        });
    };

    let common_dir = read_commondir(&git_dir)?.unwrap_or(git_dir);
    let config = common_dir.join("config");

    if !config.is_file() {
        return Err(Error::MissingConfigFile { path: config });
    }
    Ok(config)
}

/// Parse a `.git` file of the form `gitdir: <path>`.
fn read_gitdir_file(dot_git: &Path, root: &Path) -> Result<PathBuf> {
    let content = fs::read_to_string(dot_git)?;
    let target = content
        .lines()
        .find_map(|line| line.trim().strip_prefix("gitdir:"))
        .map(str::trim)
        .filter(|target| !target.is_empty())
        .ok_or_else(|| Error::MissingConfigFile {
            path: dot_git.to_path_buf(),
        })?;

    Ok(resolve_relative(root, target))
}

/// Linked worktrees keep their shared configuration in the directory named
/// by `commondir`.
fn read_commondir(git_dir: &Path) -> Result<Option<PathBuf>> {
    let commondir = git_dir.join("commondir");
    if !commondir.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&commondir)?;
    let target = content.trim();
    if target.is_empty() {
        return Ok(None);
    }
    Ok(Some(resolve_relative(git_dir, target)))
}

fn resolve_relative(base: &Path, target: &str) -> PathBuf {
    let target = Path::new(target);
    if target.is_absolute() {
        target.to_path_buf()
    } else {
        base.join(target)
    }
}
