//! Object data structures and shared utilities
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `objects`: Loose object codec and header parsing

pub mod core;
pub mod objects;
