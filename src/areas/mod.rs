//! Core repository components
//!
//! This module contains the on-disk building blocks of a repository:
//!
//! - `locator`: Resolution and validation of the repository root (`GIT_DIR`)
//! - `database`: Loose object database (lookup and enumeration)
//! - `refs`: The HEAD pointer
//! - `repository`: High-level repository coordination

pub mod database;
pub mod locator;
pub(crate) mod refs;
pub mod repository;
