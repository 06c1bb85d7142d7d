//! Sample element type constraints for SGrid binary property files
//!
//! This module defines the trait that constrains what types can be
//! stored as raw samples in a binary property file.

use crate::format::{ByteOrder, ElementWidth};
use bytemuck::Pod;

/// Trait for floating point types that can appear in binary property files
///
/// Sample types must be plain-old-data so they can be read from unaligned
/// byte windows, and widen losslessly to `f64`.
pub trait SampleElement: Pod + PartialEq {
    /// Raw byte representation of one sample
    type Bytes: Pod;

    /// Width tag for this element type
    const WIDTH: ElementWidth;

    /// Decode one sample from exactly `WIDTH` bytes in the given order
    fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self;

    /// Encode one sample in the given order
    fn to_bytes(self, order: ByteOrder) -> Self::Bytes;

    /// Widen to `f64`
    fn to_f64(self) -> f64;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

macro_rules! impl_sample_element {
    ($type:ty, $width:expr, $n:literal) => {
        impl SampleElement for $type {
            type Bytes = [u8; $n];

            const WIDTH: ElementWidth = $width;

            fn from_bytes(bytes: [u8; $n], order: ByteOrder) -> Self {
                match order {
                    ByteOrder::Little => <$type>::from_le_bytes(bytes),
                    ByteOrder::Big => <$type>::from_be_bytes(bytes),
                }
            }

            fn to_bytes(self, order: ByteOrder) -> [u8; $n] {
                match order {
                    ByteOrder::Little => self.to_le_bytes(),
                    ByteOrder::Big => self.to_be_bytes(),
                }
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_sample_element!(f32, ElementWidth::Single, 4);
impl_sample_element!(f64, ElementWidth::Double, 8);

/// Decode a whole payload as a flat array of `T` widened to `f64`
///
/// Returns `None` when the payload length is not a multiple of the element
/// width.
pub fn decode_samples<T: SampleElement>(bytes: &[u8], order: ByteOrder) -> Option<Vec<f64>> {
    let size = T::size_bytes();
    if bytes.len() % size != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(size)
            .map(|chunk| T::from_bytes(bytemuck::pod_read_unaligned(chunk), order).to_f64())
            .collect(),
    )
}

/// Encode samples as a flat byte payload
pub fn encode_samples<T: SampleElement>(values: &[T], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * T::size_bytes());
    for &value in values {
        bytes.extend_from_slice(bytemuck::bytes_of(&value.to_bytes(order)));
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(f32::WIDTH.size_bytes(), f32::size_bytes());
        assert_eq!(f64::WIDTH.size_bytes(), f64::size_bytes());
    }

    #[test]
    fn test_byte_orders_differ() {
        let value = 1.5f32;
        let le = value.to_bytes(ByteOrder::Little);
        let be = value.to_bytes(ByteOrder::Big);
        assert_ne!(le, be);
        assert_eq!(f32::from_bytes(be, ByteOrder::Big), value);
        assert_eq!(f32::from_bytes(le, ByteOrder::Little), value);
    }

    #[test]
    fn test_decode_rejects_partial_element() {
        assert_eq!(decode_samples::<f32>(&[0u8; 6], ByteOrder::Little), None);
        assert_eq!(decode_samples::<f64>(&[0u8; 12], ByteOrder::Big), None);
        assert_eq!(decode_samples::<f32>(&[], ByteOrder::Little), Some(vec![]));
    }

    #[test]
    fn test_decode_widens_exactly() {
        let values = [0.1f32, -3.25, f32::MAX, 1.0e-30];
        let bytes = encode_samples(&values, ByteOrder::Big);
        let decoded = decode_samples::<f32>(&bytes, ByteOrder::Big).unwrap();
        let widened: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        assert_eq!(decoded, widened);
    }
}
