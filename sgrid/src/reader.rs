//! SGrid reader
//!
//! [`SgReader`] parses a header once at open time and decodes property files
//! on demand. Every read produces a fresh array; the most recent result per
//! property id is kept in a small cache behind a mutex.

use crate::config::ReadConfig;
use crate::error::{Result, SgError};
use crate::property_file::{decode_property, DecodedProperty};
use crate::summary::GridSummary;
use hashbrown::HashMap;
use indexmap::{IndexMap, IndexSet};
use sgrid_core::{
    parse_header, Diagnosed, Diagnostic, GridGeometry, HeaderMetadata, PropertyRegistry, SgHeader,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, trace, warn};

/// Reader for a GOCAD SGrid header and its property files
#[derive(Debug)]
pub struct SgReader {
    path: PathBuf,
    base_dir: PathBuf,
    header: SgHeader,
    config: ReadConfig,
    cache: Mutex<HashMap<String, DecodedProperty>>,
}

/// Outcome of reading several properties
#[derive(Debug, Clone, Default)]
pub struct BatchRead {
    /// Successfully decoded properties, in registry order
    pub properties: IndexMap<String, DecodedProperty>,
    /// Warnings from successful reads and one `PropertySkipped` per failure
    pub diagnostics: Vec<Diagnostic>,
    /// Number of properties attempted
    pub attempted: usize,
}

impl BatchRead {
    pub fn succeeded(&self) -> usize {
        self.properties.len()
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded()
    }

    pub fn get(&self, id: &str) -> Option<&DecodedProperty> {
        self.properties.get(id)
    }
}

impl SgReader {
    /// Open a header with the default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, ReadConfig::default())
    }

    /// Open a header with a custom configuration
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: ReadConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes = std::fs::read(&path).map_err(|e| SgError::io(&path, e))?;
        let header = parse_header(&String::from_utf8_lossy(&bytes));

        for line in &header.malformed_lines {
            trace!(path = %path.display(), line, "skipped malformed header line");
        }
        debug!(
            path = %path.display(),
            dimensions = ?header.geometry.dimensions.map(|d| d.as_array()),
            properties = header.properties.len(),
            "parsed SGrid header"
        );

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self {
            path,
            base_dir,
            header,
            config,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory property file names are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.header.geometry
    }

    /// Declared properties keyed by id, in declaration order
    pub fn properties(&self) -> &PropertyRegistry {
        &self.header.properties
    }

    pub fn metadata(&self) -> &HeaderMetadata {
        &self.header.metadata
    }

    pub fn header(&self) -> &SgHeader {
        &self.header
    }

    pub fn config(&self) -> &ReadConfig {
        &self.config
    }

    /// Decode one property
    ///
    /// A declared property with no `PROP_FILE` record is valid header content
    /// but has no data to decode; reading it returns
    /// [`SgError::NoBackingFile`].
    pub fn read(&self, id: &str) -> Result<Diagnosed<DecodedProperty>> {
        let descriptor = self
            .header
            .properties
            .get(id)
            .ok_or_else(|| SgError::UnknownProperty(id.to_string()))?;

        let decoded = decode_property(
            descriptor,
            &self.base_dir,
            &self.header.geometry,
            &self.config,
        )?;
        for diagnostic in &decoded.diagnostics {
            warn!(id, "{diagnostic}");
        }

        self.store(&decoded.value);
        Ok(decoded)
    }

    /// Decode every declared property, skipping the ones that fail
    pub fn read_all(&self) -> BatchRead {
        self.read_batch(self.header.properties.keys().map(String::as_str))
    }

    /// Decode the given properties, skipping the ones that fail
    ///
    /// Unknown ids are reported as skipped. Repeated ids are read once.
    pub fn read_selected<I, S>(&self, ids: I) -> BatchRead
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<S> = ids.into_iter().collect();
        self.read_batch(ids.iter().map(|id| id.as_ref()))
    }

    fn read_batch<'a>(&self, ids: impl Iterator<Item = &'a str>) -> BatchRead {
        let ids: IndexSet<&str> = ids.collect();
        let mut batch = BatchRead::default();
        for id in ids {
            batch.attempted += 1;
            match self.read(id) {
                Ok(decoded) => {
                    let (property, diagnostics) = decoded.into_parts();
                    batch.diagnostics.extend(diagnostics);
                    batch.properties.insert(id.to_string(), property);
                }
                Err(err) => {
                    warn!(id, error = %err, "failed to read property");
                    batch.diagnostics.push(Diagnostic::PropertySkipped {
                        id: id.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        debug!(
            attempted = batch.attempted,
            succeeded = batch.succeeded(),
            failed = batch.failed(),
            "batch read finished"
        );
        batch
    }

    /// The most recent successful read of `id`, if any
    pub fn last_decoded(&self, id: &str) -> Option<DecodedProperty> {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.get(id).cloned()
    }

    /// Drop all cached reads
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.clear();
    }

    fn store(&self, property: &DecodedProperty) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.insert(property.id.clone(), property.clone());
    }

    /// Human-readable overview of the grid
    pub fn summary(&self) -> GridSummary {
        GridSummary::new(&self.path, &self.header, &self.config)
    }
}
