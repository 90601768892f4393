//! Command implementations
//!
//! Commands are split the way git splits them:
//!
//! - `plumbing`: Low-level object inspection (cat-file, ls-tree)
//! - `porcelain`: User-facing repository setup (init)

pub mod plumbing;
pub mod porcelain;
