//! ASCII property file loading

use super::{DecodedProperty, Encoding};
use crate::config::ReadConfig;
use crate::error::{Result, SgError};
use sgrid_core::validation::{check_count, CountCheck};
use sgrid_core::{decode_text, mask_no_data, Diagnosed, Diagnostic, PropertyDescriptor};
use std::path::Path;
use tracing::{debug, warn};

/// Decode a text property file
pub(crate) fn read_text(
    path: &Path,
    descriptor: &PropertyDescriptor,
    expected: Option<u64>,
    config: &ReadConfig,
) -> Result<Diagnosed<DecodedProperty>> {
    let bytes = std::fs::read(path).map_err(|e| SgError::io(path, e))?;
    let byte_len = bytes.len() as u64;
    let text = String::from_utf8_lossy(&bytes);

    let mut values = decode_text(&text, config.text_preamble_lines).map_err(|source| {
        warn!(path = %path.display(), error = %source, "failed to parse text property file");
        SgError::Decode {
            path: path.to_path_buf(),
            byte_len,
            source,
        }
    })?;

    let masked = mask_no_data(&mut values, descriptor.no_data);
    debug!(
        id = %descriptor.id,
        count = values.len(),
        masked,
        "decoded text property"
    );

    let mut diagnostics = Vec::new();
    if let CountCheck::Mismatch { decoded, expected } = check_count(values.len(), expected) {
        diagnostics.push(Diagnostic::ValueCountMismatch { decoded, expected });
    }

    Ok(Diagnosed {
        value: DecodedProperty::new(&descriptor.id, values, Encoding::Text, masked),
        diagnostics,
    })
}
