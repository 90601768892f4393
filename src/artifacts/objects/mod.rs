//! Loose object format
//!
//! Every loose object is stored zlib-compressed as `<type> <size>\0<content>`.
//!
//! - `codec`: Inflate an object file and split header from body
//! - `object_header`: Parse the `<type> <size>` header

pub mod codec;
pub mod object_header;

/// Length of a shard directory name under `objects/`
pub const SHARD_NAME_LENGTH: usize = 2;

/// Shortest hash usable as a lookup key: a shard plus at least one character
pub const MIN_HASH_LENGTH: usize = SHARD_NAME_LENGTH + 1;
