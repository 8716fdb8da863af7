//! Reference value objects
//!
//! File and tag references carry no behavior beyond identity. Two references
//! are equal iff their values are equal, which is what gives the cluster's
//! reference sets their set semantics.

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, Result};

/// Location of a configuration, dependency or setup file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    /// Create a file reference
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the location is empty or whitespace-only.
    pub fn new(file: impl Into<String>) -> Result<Self> {
        let file = file.into();
        if file.trim().is_empty() {
            return Err(CatalogError::InvalidReference {
                kind: "file".to_string(),
                reason: "file location cannot be empty".to_string(),
            });
        }
        Ok(Self(file))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Descriptive tag attached to a cluster
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagRef(String);

impl TagRef {
    /// Create a tag reference, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the trimmed tag is empty.
    pub fn new(tag: impl AsRef<str>) -> Result<Self> {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            return Err(CatalogError::InvalidReference {
                kind: "tag".to_string(),
                reason: "tag cannot be empty".to_string(),
            });
        }
        Ok(Self(tag.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for TagRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
