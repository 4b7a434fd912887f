//! # dist-github-meta
//!
//! Derives the `resources` metadata of a distribution (homepage, bug tracker
//! and repository URL) from the git checkout it is built in. It is used by
//! the `dist-github-meta` command-line tool, and can be embedded in any build
//! pipeline that needs the same record.
//!
//! ## Quick Example
//!
//! ```no_run
//! use dist_github_meta::git::ConfigResolver;
//! use dist_github_meta::options::MetaOptions;
//! use dist_github_meta::resources::assemble;
//!
//! let resolver = ConfigResolver::from_current_dir().unwrap();
//! let options = MetaOptions::new("Test-Repo").with_repository_url("%{deb}N");
//!
//! let meta = assemble(&options, &resolver).unwrap();
//! println!("{}", meta.to_json().unwrap());
//! ```
//!
//! ## Core Concepts
//!
//! - **Git resolution (`git`)**: Finds `.git/config`, looks up the configured
//!   remote and extracts the account and project from its URL.
//! - **Templates (`template`)**: Fills `%a`, `%r` and `%N` placeholders, with
//!   `%{lc}N`, `%{uc}N` and `%{deb}N` transforms for the distribution name.
//! - **Options (`options`)**: The remote and the three templates, with
//!   defaults, optionally read from `dist.ini`.
//! - **Assembly (`resources`)**: Resolves once, renders all three fields, and
//!   returns them as one serializable record.
//!
//! Nothing here writes to disk or touches the network.

pub mod error;
pub mod git;
pub mod options;
pub mod resources;
pub mod template;

#[cfg(test)]
mod identity_proptest;
