//! Property file decoding
//!
//! A property's backing file is binary when its name ends in the configured
//! marker suffix and text otherwise. Both paths return a [`DecodedProperty`]
//! with sentinel cells already replaced by NaN.

mod binary;
mod text;

use crate::config::ReadConfig;
use crate::error::{Result, SgError};
use sgrid_core::{Diagnosed, GridGeometry, PropertyDescriptor, SampleLayout};
use std::{fmt, path::Path, sync::Arc};

/// How a property file was stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// Raw samples in the given layout
    Binary(SampleLayout),
    /// Whitespace-separated ASCII numbers
    Text,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Binary(layout) => write!(f, "binary ({layout})"),
            Encoding::Text => write!(f, "ASCII"),
        }
    }
}

/// Values of one property, one per cell in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedProperty {
    pub id: String,
    /// Shared so cached copies don't duplicate the array
    pub values: Arc<[f64]>,
    pub encoding: Encoding,
    /// Number of cells replaced by NaN
    pub masked: usize,
}

impl DecodedProperty {
    pub fn new(id: &str, values: Vec<f64>, encoding: Encoding, masked: usize) -> Self {
        Self {
            id: id.to_string(),
            values: values.into(),
            encoding,
            masked,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample layout for binary properties
    pub fn layout(&self) -> Option<SampleLayout> {
        match self.encoding {
            Encoding::Binary(layout) => Some(layout),
            Encoding::Text => None,
        }
    }
}

/// Decode the file backing `descriptor`
pub(crate) fn decode_property(
    descriptor: &PropertyDescriptor,
    base_dir: &Path,
    geometry: &GridGeometry,
    config: &ReadConfig,
) -> Result<Diagnosed<DecodedProperty>> {
    let path = descriptor
        .resolve(base_dir)
        .ok_or_else(|| SgError::NoBackingFile(descriptor.id.clone()))?;
    let expected = geometry.cell_count();

    if descriptor.is_binary(&config.binary_suffix) {
        binary::read_binary(&path, descriptor, expected, config)
    } else {
        text::read_text(&path, descriptor, expected, config)
    }
}
