//! # Metadata Assembly
//!
//! Builds the `resources` block of a distribution's metadata. One call:
//!
//! 1. resolves the git identity once through an [`IdentitySource`],
//! 2. renders the homepage, bug tracker and repository templates against it,
//! 3. returns all three fields together, or the first error.
//!
//! The record serializes to the layout the packaging pipeline merges into
//! its manifest:
//!
//! ```json
//! {
//!   "resources": {
//!     "homepage": "http://github.com/oalders/test-repo/wiki",
//!     "bugtracker": { "web": "https://rt.cpan.org/Public/Dist/Display.html?Name=Test-Repo" },
//!     "repository": { "url": "git://github.com/oalders/test-repo.git" }
//!   }
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::git::IdentitySource;
use crate::options::MetaOptions;
use crate::template::{self, TemplateContext};

/// Top-level metadata fragment produced by [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaResources {
    pub resources: Resources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub homepage: String,
    pub bugtracker: Bugtracker,
    pub repository: Repository,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bugtracker {
    pub web: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub url: String,
}

impl MetaResources {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })
    }

    /// YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })
    }
}

/// Produce the resources record for `options`.
pub fn assemble<S: IdentitySource + ?Sized>(
    options: &MetaOptions,
    source: &S,
) -> Result<MetaResources> {
    let identity = source.resolve(&options.remote)?;
    let ctx = TemplateContext::from_identity(&identity, &options.name);

    let homepage = template::format(&options.homepage, &ctx)?;
    let web = template::format(&options.bugtracker_web, &ctx)?;
    let url = template::format(&options.repository_url, &ctx)?;
    debug!("Assembled resources for {}", options.name);

    Ok(MetaResources {
        resources: Resources {
            homepage,
            bugtracker: Bugtracker { web },
            repository: Repository { url },
        },
    })
}
