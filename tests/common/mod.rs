//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_git_config(configs::ORIGIN);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common git and dist.ini snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// A freshly cloned repository with an `origin` remote.
    pub const ORIGIN: &str = r#"[core]
	repositoryformatversion = 0
	filemode = true
	bare = false
	logallrefupdates = true
[remote "origin"]
	url = git@github.com:oalders/test-repo.git
	fetch = +refs/heads/*:refs/remotes/origin/*
[branch "main"]
	remote = origin
	merge = refs/heads/main
"#;

    /// A fork with both `origin` and `upstream` remotes.
    pub const FORK: &str = r#"[core]
	bare = false
[remote "origin"]
	url = git@github.com:someone/test-repo.git
	fetch = +refs/heads/*:refs/remotes/origin/*
[remote "upstream"]
	url = https://github.com/oalders/test-repo.git
	fetch = +refs/heads/*:refs/remotes/upstream/*
"#;

    /// A remote whose URL has no `.git` suffix.
    pub const NO_SUFFIX: &str = r#"[remote "origin"]
	url = https://github.com/oalders/test-repo
"#;

    /// Minimal dist.ini naming the distribution.
    pub const DIST_INI: &str = "name = Test-Repo\n";
}

/// A test fixture that provides a temporary checkout directory.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_git_config(configs::ORIGIN)
///     .with_dist_ini(configs::DIST_INI);
///
/// fixture.command().assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `.git/config` with the given content.
    pub fn with_git_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".git/config")
            .write_str(content)
            .expect("Failed to write git config");
        self
    }

    /// Write `dist.ini` with the given content.
    pub fn with_dist_ini(self, content: &str) -> Self {
        self.with_file("dist.ini", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dist-github-meta");
        cmd.current_dir(self.path())
            .env_remove("DIST_GITHUB_META_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
