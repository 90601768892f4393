//! Porcelain commands
//!
//! - `init`: Create an empty repository skeleton

pub mod init;
