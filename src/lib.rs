//! A minimal reader and initializer for a git-style loose object store.
//!
//! - `areas`: repository root, object database and refs on disk
//! - `artifacts`: object codec and header parsing
//! - `commands`: command implementations on top of [`areas::repository::Repository`]

pub mod areas;
pub mod artifacts;
pub mod commands;
