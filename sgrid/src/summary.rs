//! Human-readable grid overview

use crate::config::ReadConfig;
use sgrid_core::{Dimensions, SgHeader, Vec3};
use std::fmt;
use std::path::{Path, PathBuf};

/// Storage kind of a property's backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FileKind {
    Binary,
    Ascii,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Binary => write!(f, "Binary"),
            FileKind::Ascii => write!(f, "ASCII"),
        }
    }
}

/// One line of the property listing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropertySummary {
    pub id: String,
    pub name: String,
    pub file: Option<String>,
    /// `None` when the property has no backing file
    pub kind: Option<FileKind>,
}

/// Snapshot of a grid's header for display
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridSummary {
    pub name: Option<String>,
    pub object_type: Option<String>,
    pub file: PathBuf,
    pub dimensions: Option<Dimensions>,
    pub cell_count: Option<u64>,
    pub origin: Option<Vec3>,
    pub spacing: Option<Vec3>,
    pub properties: Vec<PropertySummary>,
}

impl GridSummary {
    pub(crate) fn new(path: &Path, header: &SgHeader, config: &ReadConfig) -> Self {
        let properties = header
            .properties
            .values()
            .map(|prop| PropertySummary {
                id: prop.id.clone(),
                name: prop.display_name.clone(),
                file: prop.file.clone(),
                kind: prop.file.as_ref().map(|_| {
                    if prop.is_binary(&config.binary_suffix) {
                        FileKind::Binary
                    } else {
                        FileKind::Ascii
                    }
                }),
            })
            .collect();

        Self {
            name: header.metadata.name.clone(),
            object_type: header.metadata.object_type.clone(),
            file: path.to_path_buf(),
            dimensions: header.geometry.dimensions,
            cell_count: header.geometry.cell_count(),
            origin: header.geometry.origin,
            spacing: header.geometry.spacing,
            properties,
        }
    }

    /// Render the summary as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

const RULE_WIDTH: usize = 60;

impl fmt::Display for GridSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "GOCAD SG Grid Information")?;
        writeln!(f, "{rule}")?;

        if let Some(name) = &self.name {
            writeln!(f, "Name: {name}")?;
        }
        if let Some(object_type) = &self.object_type {
            writeln!(f, "Type: {object_type}")?;
        }
        writeln!(f, "File: {}", self.file.display())?;

        if let (Some(dims), Some(cells)) = (self.dimensions, self.cell_count) {
            writeln!(f, "\nDimensions: {dims}")?;
            writeln!(f, "Total cells: {}", group_thousands(cells))?;
        }
        if let Some(origin) = self.origin {
            writeln!(f, "\nOrigin: {origin}")?;
        }
        if let Some(spacing) = self.spacing {
            writeln!(f, "Spacing: {spacing}")?;
        }

        if !self.properties.is_empty() {
            writeln!(f, "\nProperties ({}):", self.properties.len())?;
            for prop in &self.properties {
                match (&prop.file, prop.kind) {
                    (Some(file), Some(kind)) => {
                        writeln!(f, "  - {} ({}): {file} [{kind}]", prop.name, prop.id)?
                    }
                    _ => writeln!(f, "  - {} ({}): N/A", prop.name, prop.id)?,
                }
            }
        }

        write!(f, "{rule}")
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
