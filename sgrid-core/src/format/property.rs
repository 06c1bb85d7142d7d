//! Property registry definitions

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A scalar field declared by a `PROPERTY` header line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDescriptor {
    /// Registry key as written after `PROPERTY`
    pub id: String,
    /// Display name, defaults to the id
    pub display_name: String,
    /// Backing file name relative to the header directory
    pub file: Option<String>,
    /// Raw value meaning "no data"
    pub no_data: Option<f64>,
}

impl PropertyDescriptor {
    /// Create a descriptor with no backing file and no sentinel
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            file: None,
            no_data: None,
        }
    }

    /// Whether the backing file name carries the binary marker suffix
    pub fn is_binary(&self, suffix: &str) -> bool {
        self.file.as_deref().is_some_and(|f| f.ends_with(suffix))
    }

    /// Resolve the backing file against the header's directory
    pub fn resolve(&self, base_dir: &Path) -> Option<PathBuf> {
        self.file.as_ref().map(|f| base_dir.join(f))
    }
}

/// Ordered mapping of property id to descriptor
pub type PropertyRegistry = IndexMap<String, PropertyDescriptor>;

/// Free-text header fields not needed for decoding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderMetadata {
    /// Object type from the `GOCAD` line
    pub object_type: Option<String>,
    /// Object name from the `NAME` line
    pub name: Option<String>,
}
