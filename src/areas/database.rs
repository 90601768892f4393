//! Loose object database
//!
//! Objects live at `objects/<hash[..2]>/<hash[2..]>`. Lookups are pure reads:
//! objects are immutable once written and nothing is cached between calls.
//!
//! Enumeration is lazy. A corrupt or unreadable object produces an `Err` item
//! and the walk carries on with the remaining objects.

use crate::artifacts::objects::codec::{self, CodecError, RawObject};
use crate::artifacts::objects::object_header::{ObjectHeader, ObjectType};
use crate::artifacts::objects::{MIN_HASH_LENGTH, SHARD_NAME_LENGTH};
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid hash: {0:?}")]
    InvalidHash(String),
    #[error("unable to read object file {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("object {hash} is corrupt")]
    Corrupt {
        hash: String,
        #[source]
        source: CodecError,
    },
}

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, hash: &str) -> Result<RawObject, StoreError> {
        let object_path = self.object_path(hash)?;
        tracing::debug!("reading object {} from {}", hash, object_path.display());

        read_object(hash, &object_path)
    }

    /// Start a fresh walk over every loose object.
    pub fn list_all(&self) -> Listing {
        let shards = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter();

        Listing {
            objects_path: self.path.to_path_buf(),
            shards,
            objects: None,
        }
    }

    fn object_path(&self, hash: &str) -> Result<PathBuf, StoreError> {
        if hash.len() < MIN_HASH_LENGTH || !hash.is_char_boundary(SHARD_NAME_LENGTH) {
            return Err(StoreError::InvalidHash(hash.to_string()));
        }

        let (dir, file) = hash.split_at(SHARD_NAME_LENGTH);
        Ok(self.path.join(dir).join(file))
    }
}

fn read_object(hash: &str, object_path: &Path) -> Result<RawObject, StoreError> {
    let object_content = std::fs::read(object_path).map_err(|source| StoreError::NotFound {
        path: object_path.to_path_buf(),
        source,
    })?;

    codec::decode(&object_content).map_err(|source| StoreError::Corrupt {
        hash: hash.to_string(),
        source,
    })
}

/// One decoded object produced while enumerating the database.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ListingEntry {
    hash: String,
    object: RawObject,
}

impl ListingEntry {
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn header(&self) -> &str {
        self.object.header()
    }

    pub fn body(&self) -> &Bytes {
        self.object.body()
    }

    pub fn object_type(&self) -> ObjectType {
        ObjectHeader::parse(self.header()).object_type().clone()
    }
}

/// Decoded entries and the per-object failures of a complete walk.
#[derive(Debug, Default)]
pub struct ListingReport {
    pub entries: Vec<ListingEntry>,
    pub failures: Vec<StoreError>,
}

/// Lazy walk over `objects/<shard>/<file>`.
///
/// Only directories whose name is exactly two characters are treated as
/// shards, which keeps `pack/`, `info/` and stray files out of the listing.
pub struct Listing {
    objects_path: PathBuf,
    shards: walkdir::IntoIter,
    objects: Option<(String, walkdir::IntoIter)>,
}

impl Listing {
    pub fn partition(self) -> ListingReport {
        self.fold(ListingReport::default(), |mut report, item| {
            match item {
                Ok(entry) => report.entries.push(entry),
                Err(error) => report.failures.push(error),
            }
            report
        })
    }

    fn next_shard(&mut self) -> Option<Result<(), StoreError>> {
        loop {
            let shard = match self.shards.next()? {
                Ok(shard) => shard,
                Err(error) => return Some(Err(walk_error(&self.objects_path, error))),
            };

            // byte length, the same unit `get` splits hashes by
            if !shard.file_type().is_dir() || shard.file_name().len() != SHARD_NAME_LENGTH {
                tracing::debug!("skipping {} while listing objects", shard.path().display());
                continue;
            }

            let objects = WalkDir::new(shard.path())
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
                .into_iter();
            let name = shard.file_name().to_string_lossy().into_owned();
            self.objects = Some((name, objects));

            return Some(Ok(()));
        }
    }
}

fn walk_error(objects_path: &Path, error: walkdir::Error) -> StoreError {
    let path = error
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| objects_path.to_path_buf());

    StoreError::NotFound {
        path,
        source: error.into(),
    }
}

impl Iterator for Listing {
    type Item = Result<ListingEntry, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((shard, objects)) = self.objects.as_mut() else {
                if let Err(error) = self.next_shard()? {
                    return Some(Err(error));
                }
                continue;
            };

            let object = match objects.next() {
                Some(Ok(object)) => object,
                Some(Err(error)) => return Some(Err(walk_error(&self.objects_path, error))),
                None => {
                    self.objects = None;
                    continue;
                }
            };

            if object.file_type().is_dir() {
                tracing::debug!("skipping directory {}", object.path().display());
                continue;
            }

            let hash = format!("{}{}", shard, object.file_name().to_string_lossy());
            return match read_object(&hash, object.path()) {
                Ok(raw) => Some(Ok(ListingEntry::new(hash, raw))),
                Err(error) => {
                    tracing::debug!("failed to list {}: {}", hash, error);
                    Some(Err(error))
                }
            };
        }
    }
}
