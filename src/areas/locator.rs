//! Repository root resolution
//!
//! The root is picked once at startup with the following precedence:
//!
//! 1. An explicit path (the `--git-dir` flag)
//! 2. The `GIT_DIR` environment variable
//! 3. The hard-coded fallback `.git`
//!
//! Overriding the root with a path that does not exist is not an error: the
//! previous root is kept and a warning is logged, since repository discovery
//! routinely tries paths that are not created yet.

use std::path::{Path, PathBuf};

/// Environment variable selecting the repository root
pub const GIT_DIR_ENV: &str = "GIT_DIR";

/// Root used when neither a flag nor the environment provides one
pub const DEFAULT_GIT_DIR: &str = ".git";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("git-dir cannot be empty")]
    Empty,
}

/// Outcome of a root override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootUpdate {
    /// The requested path exists and is now the root
    Changed,
    /// The requested path does not exist, the previous root is still in use
    KeptPrevious { requested: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    root: PathBuf,
}

impl RepositoryLocator {
    /// Build a locator from the environment-provided default.
    pub fn new(env_path: Option<&str>) -> Self {
        RepositoryLocator {
            root: Self::resolve(None, env_path),
        }
    }

    pub fn resolve(explicit_path: Option<&str>, env_path: Option<&str>) -> PathBuf {
        explicit_path
            .filter(|path| !path.is_empty())
            .or(env_path.filter(|path| !path.is_empty()))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GIT_DIR))
    }

    pub fn set_root(&mut self, path: &str) -> Result<RootUpdate, ConfigError> {
        if path.is_empty() {
            return Err(ConfigError::Empty);
        }

        let requested = PathBuf::from(path);
        if !requested.exists() {
            tracing::warn!(
                "git-dir [ {} ] does not exist, keeping [ {} ]",
                requested.display(),
                self.root.display()
            );
            return Ok(RootUpdate::KeptPrevious { requested });
        }

        tracing::debug!("git-dir set to [ {} ]", requested.display());
        self.root = requested;

        Ok(RootUpdate::Changed)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn objects_path(&self) -> PathBuf {
        self.root.join("objects")
    }
}
