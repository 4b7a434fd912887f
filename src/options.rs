//! # Options
//!
//! The caller-facing settings of a metadata request, with their defaults:
//!
//! | option | default |
//! |--------|---------|
//! | `name` | *(required)* |
//! | `remote` | `origin` |
//! | `homepage` | `http://github.com/%a/%r/wiki` |
//! | `bugtracker.web` | `https://rt.cpan.org/Public/Dist/Display.html?Name=%N` |
//! | `repository.url` | `git://github.com/%a/%r.git` |
//!
//! Options can be read from a `dist.ini`-style file: the distribution name
//! is the root-level `name` key, and the rest live in a `[GithubMeta]` (or
//! `[GitHub::Meta]`) section.
//!
//! ```ini
//! name = Test-Repo
//!
//! [GithubMeta]
//! remote = upstream
//! repository.url = %{deb}N
//! ```

use std::path::Path;

use ini::Ini;
use log::debug;

use crate::error::{Error, Result};
use crate::git::DEFAULT_REMOTE;

pub const DEFAULT_HOMEPAGE: &str = "http://github.com/%a/%r/wiki";
pub const DEFAULT_BUGTRACKER_WEB: &str = "https://rt.cpan.org/Public/Dist/Display.html?Name=%N";
pub const DEFAULT_REPOSITORY_URL: &str = "git://github.com/%a/%r.git";

/// Section names accepted for the plugin settings in an options file.
pub const SECTION_NAMES: [&str; 2] = ["GithubMeta", "GitHub::Meta"];

/// Settings for one metadata request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaOptions {
    /// Distribution name, substituted for `%N`.
    pub name: String,
    /// Which git remote to read.
    pub remote: String,
    /// Template for `resources.homepage`.
    pub homepage: String,
    /// Template for `resources.bugtracker.web`.
    pub bugtracker_web: String,
    /// Template for `resources.repository.url`.
    pub repository_url: String,
}

impl MetaOptions {
    /// Options for `name` with every other setting at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote: DEFAULT_REMOTE.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            bugtracker_web: DEFAULT_BUGTRACKER_WEB.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn with_homepage(mut self, template: impl Into<String>) -> Self {
        self.homepage = template.into();
        self
    }

    pub fn with_bugtracker_web(mut self, template: impl Into<String>) -> Self {
        self.bugtracker_web = template.into();
        self
    }

    pub fn with_repository_url(mut self, template: impl Into<String>) -> Self {
        self.repository_url = template.into();
        self
    }

    /// Parse options from `dist.ini`-style text.
    ///
    /// `fallback_name` is used when the text has no root-level `name`.
    pub fn parse(content: &str, fallback_name: Option<&str>) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
            hint: None,
        })?;
        Self::from_ini(&ini, fallback_name)
    }

    /// Read options from a `dist.ini`-style file.
    pub fn from_file<P: AsRef<Path>>(path: P, fallback_name: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading options from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, fallback_name).map_err(|e| match e {
            Error::ConfigParse { message, hint } => Error::ConfigParse {
                message: format!("{}: {}", path.display(), message),
                hint,
            },
            other => other,
        })
    }

    fn from_ini(ini: &Ini, fallback_name: Option<&str>) -> Result<Self> {
        let name = ini
            .section(None::<String>)
            .and_then(|general| general.get("name"))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or(fallback_name)
            .ok_or_else(|| Error::ConfigParse {
                message: "No distribution name configured".to_string(),
                hint: Some(
                    "Add 'name = Your-Dist' at the top of dist.ini or pass --name".to_string(),
                ),
            })?;

        let mut options = Self::new(name);

        let Some(section) = SECTION_NAMES
            .iter()
            .find_map(|section| ini.section(Some(*section)))
        else {
            debug!("No [{}] section; using default templates", SECTION_NAMES[0]);
            return Ok(options);
        };

        for (key, value) in section.iter() {
            let value = value.trim().to_string();
            match key.trim() {
                "remote" => options.remote = value,
                "homepage" => options.homepage = value,
                "bugtracker.web" => options.bugtracker_web = value,
                "repository.url" => options.repository_url = value,
                other => {
                    return Err(Error::ConfigParse {
                        message: format!("Unknown option '{}' in [{}]", other, SECTION_NAMES[0]),
                        hint: Some(
                            "Supported options: remote, homepage, bugtracker.web, repository.url"
                                .to_string(),
                        ),
                    })
                }
            }
        }

        if options.remote.is_empty() {
            return Err(Error::ConfigParse {
                message: "Option 'remote' must not be empty".to_string(),
                hint: None,
            });
        }

        Ok(options)
    }
}
