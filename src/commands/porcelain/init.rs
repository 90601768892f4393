use crate::areas::repository::Repository;
use anyhow::Context;
use std::fmt;
use std::fs;
use std::path::PathBuf;

const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitStep {
    CreateDirectory(PathBuf),
    WriteHead(PathBuf),
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitStep::CreateDirectory(path) => write!(f, "create directory {}", path.display()),
            InitStep::WriteHead(path) => write!(f, "write {}", path.display()),
        }
    }
}

#[derive(Debug)]
pub struct InitFailure {
    pub step: InitStep,
    pub error: anyhow::Error,
}

/// Steps of an init that could not be completed.
#[derive(Debug, Default)]
pub struct InitReport {
    pub failures: Vec<InitFailure>,
}

impl InitReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn attempt(&mut self, step: InitStep, action: impl FnOnce() -> anyhow::Result<()>) {
        if let Err(error) = action() {
            tracing::warn!("failed to {}: {:#}", step, error);
            self.failures.push(InitFailure { step, error });
        }
    }
}

impl Repository {
    /// Create the repository skeleton and point HEAD at the default branch.
    ///
    /// Every step is attempted even when an earlier one fails, so that
    /// re-running init on a partially created repository fills in the gaps.
    pub fn init(&self) -> anyhow::Result<InitReport> {
        let mut report = InitReport::default();

        let directories = [
            self.path().to_path_buf(),
            self.database().objects_path().to_path_buf(),
            self.refs().refs_path().to_path_buf(),
        ];
        for directory in directories {
            report.attempt(InitStep::CreateDirectory(directory.clone()), || {
                fs::create_dir_all(&directory)
                    .with_context(|| format!("Failed to create {} directory", directory.display()))
            });
        }

        report.attempt(InitStep::WriteHead(self.refs().head_path().to_path_buf()), || {
            self.refs()
                .set_head(DEFAULT_BRANCH)
                .context("Failed to create initial HEAD reference")
        });

        if report.is_success() {
            let root = self
                .path()
                .canonicalize()
                .unwrap_or_else(|_| self.path().to_path_buf());
            writeln!(
                self.writer(),
                "Initialized empty Git repository in {}",
                root.display()
            )?;
        }

        Ok(report)
    }
}
