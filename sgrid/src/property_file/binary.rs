//! Binary (`@@`) property file loading
//!
//! The file is mapped read-only (or read into memory when mapping is off)
//! for the duration of one decode. The mapping is dropped before the
//! decoded values are returned, on success and failure alike.

use super::{DecodedProperty, Encoding};
use crate::config::ReadConfig;
use crate::error::{Result, SgError};
#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};
use sgrid_core::decode::{decode_binary, mask_no_data, stored_sentinel};
use sgrid_core::{BinaryDecoded, Diagnosed, PropertyDescriptor};
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

/// Raw bytes of a binary property file
pub(crate) enum Payload {
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Payload {
    /// Open `path` and expose its contents
    pub(crate) fn load(path: &Path, use_mmap: bool) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| SgError::io(path, e))?;
        let len = file.metadata().map_err(|e| SgError::io(path, e))?.len();

        if use_mmap && len > 0 {
            if let Some(payload) = Self::map(&file, path)? {
                return Ok(payload);
            }
        }

        let mut bytes = Vec::with_capacity(len as usize);
        file.read_to_end(&mut bytes)
            .map_err(|e| SgError::io(path, e))?;
        Ok(Payload::Owned(bytes))
    }

    #[cfg(feature = "mmap")]
    fn map(file: &File, path: &Path) -> Result<Option<Self>> {
        // SAFETY: Read-only mapping, dropped before the decoded values are returned
        let mmap = unsafe { MmapOptions::new().map(file) }.map_err(|e| SgError::io(path, e))?;
        Ok(Some(Payload::Mapped(mmap)))
    }

    #[cfg(not(feature = "mmap"))]
    fn map(_file: &File, _path: &Path) -> Result<Option<Self>> {
        Ok(None)
    }

    pub(crate) fn is_mapped(&self) -> bool {
        match self {
            #[cfg(feature = "mmap")]
            Payload::Mapped(_) => true,
            Payload::Owned(_) => false,
        }
    }
}

impl std::ops::Deref for Payload {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            #[cfg(feature = "mmap")]
            Payload::Mapped(mmap) => mmap,
            Payload::Owned(bytes) => bytes,
        }
    }
}

/// Decode a binary property file, inferring its sample layout
pub(crate) fn read_binary(
    path: &Path,
    descriptor: &PropertyDescriptor,
    expected: Option<u64>,
    config: &ReadConfig,
) -> Result<Diagnosed<DecodedProperty>> {
    let payload = Payload::load(path, config.use_mmap)?;
    debug!(
        path = %path.display(),
        bytes = payload.len(),
        mapped = payload.is_mapped(),
        "loaded binary property file"
    );

    let decoded = decode_binary(&payload, expected, &config.binary_options()).map_err(|source| {
        SgError::Decode {
            path: path.to_path_buf(),
            byte_len: payload.len() as u64,
            source,
        }
    })?;
    drop(payload);

    let (BinaryDecoded { mut values, layout }, diagnostics) = decoded.into_parts();
    let sentinel = descriptor.no_data.map(|s| stored_sentinel(s, &layout));
    let masked = mask_no_data(&mut values, sentinel);
    debug!(
        id = %descriptor.id,
        %layout,
        count = values.len(),
        masked,
        "decoded binary property"
    );

    Ok(Diagnosed {
        value: DecodedProperty::new(&descriptor.id, values, Encoding::Binary(layout), masked),
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgrid_core::{encode_samples, ByteOrder};

    #[test]
    fn test_payload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Payload::load(&dir.path().join("absent@@"), true).err().unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_payload_mapped_and_owned_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values@@");
        let bytes = encode_samples(&[1.0f32, 2.0, 3.0], ByteOrder::Little);
        std::fs::write(&path, &bytes).unwrap();

        let mapped = Payload::load(&path, true).unwrap();
        let owned = Payload::load(&path, false).unwrap();
        assert_eq!(&*mapped, &bytes[..]);
        assert_eq!(&*owned, &bytes[..]);
        assert!(!owned.is_mapped());
        assert_eq!(mapped.is_mapped(), cfg!(feature = "mmap"));
    }

    #[test]
    fn test_payload_empty_file_not_mapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty@@");
        std::fs::write(&path, b"").unwrap();

        let payload = Payload::load(&path, true).unwrap();
        assert!(payload.is_empty());
        assert!(!payload.is_mapped());
    }

    #[test]
    fn test_read_binary_masks_single_precision_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masked@@");
        let sentinel = -1.0e30;
        let raw = [1.0f32, sentinel as f32, 3.0, sentinel as f32];
        std::fs::write(&path, encode_samples(&raw, ByteOrder::Little)).unwrap();

        let mut descriptor = PropertyDescriptor::new("1", "density");
        descriptor.no_data = Some(sentinel);
        let decoded = read_binary(&path, &descriptor, Some(4), &ReadConfig::default()).unwrap();

        let values = decoded.value.values();
        assert_eq!(decoded.value.masked, 2);
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 3.0);
        assert!(values[3].is_nan());
    }
}
