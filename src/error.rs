//! # Error Handling
//!
//! This module defines the centralized error type for `dist-github-meta`. It
//! uses the `thiserror` library to build a single `Error` enum covering every
//! way metadata generation can fail.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Each variant names one failure and carries
//!   the remote, URL, path or value that caused it, so the message alone is
//!   enough to fix the problem.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! All variants are fatal. Nothing in the crate retries or falls back to a
//! default once one of them has been raised, and no partial metadata is
//! produced.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dist-github-meta operations
#[derive(Error, Debug)]
pub enum Error {
    /// The git configuration file could not be found.
    #[error("No git configuration found at {}: is this a git checkout?", path.display())]
    MissingConfigFile { path: PathBuf },

    /// No `[remote "<name>"]` section exists in the git configuration.
    #[error("Remote '{remote}' is not configured in {}", path.display())]
    MissingRemote { remote: String, path: PathBuf },

    /// The remote section exists but has no usable `url` value.
    #[error("Remote '{remote}' has no url")]
    MissingUrl { remote: String },

    /// The remote URL does not end in `<account>/<project>.git`.
    #[error("Cannot extract account and project from url '{url}'")]
    UnparseableUrl { url: String },

    /// The account segment of the remote URL is empty.
    #[error("Empty account in url '{url}'")]
    EmptyAccount { url: String },

    /// The project segment of the remote URL is empty.
    #[error("Empty project in url '{url}'")]
    EmptyProject { url: String },

    /// A template used a `%{...}N` transform that does not exist.
    #[error("Unknown transform '{transform}' in template '{template}' (expected one of: lc, uc, deb)")]
    UnknownTransform { transform: String, template: String },

    /// An error occurred while reading the options file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// An error occurred while rendering the metadata record.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
