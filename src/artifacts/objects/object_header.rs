//! Object header parsing
//!
//! Headers conventionally read `<type> <byte-length>`, e.g. `blob 14`.
//! The declared length is exposed as-is and never checked against the body.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
    Tag,
    Unknown(String),
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
            ObjectType::Tag => "tag",
            ObjectType::Unknown(name) => name.as_str(),
        }
    }
}

impl From<&str> for ObjectType {
    fn from(value: &str) -> Self {
        match value {
            "blob" => ObjectType::Blob,
            "tree" => ObjectType::Tree,
            "commit" => ObjectType::Commit,
            "tag" => ObjectType::Tag,
            other => ObjectType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHeader {
    object_type: ObjectType,
    declared_size: Option<usize>,
}

impl ObjectHeader {
    pub fn parse(header: &str) -> Self {
        let mut tokens = header.split(' ');
        let object_type = ObjectType::from(tokens.next().unwrap_or_default());
        let declared_size = tokens.next_back().and_then(|size| size.parse().ok());

        ObjectHeader {
            object_type,
            declared_size,
        }
    }

    pub fn object_type(&self) -> &ObjectType {
        &self.object_type
    }

    pub fn declared_size(&self) -> Option<usize> {
        self.declared_size
    }
}
