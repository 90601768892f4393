//! Plumbing commands (low-level object access)
//!
//! - `cat-file`: Print the body or type of one or more objects
//! - `ls-tree`: List every loose object with its type and body

pub mod cat_file;
pub mod ls_tree;
