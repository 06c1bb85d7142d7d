//! Property payload decoding
//!
//! Pure decoders for the two property file kinds. The caller supplies the
//! file contents; no I/O happens here.

pub mod binary;
pub mod text;

pub use binary::{decode_binary, BinaryDecoded, BinaryOptions, Strategy, STRATEGIES};
pub use text::decode_text;

use crate::format::{ElementWidth, SampleLayout};

/// Replace every value equal to the sentinel with NaN
///
/// Returns the number of masked cells.
pub fn mask_no_data(values: &mut [f64], sentinel: Option<f64>) -> usize {
    let Some(sentinel) = sentinel else {
        return 0;
    };
    let mut masked = 0;
    for value in values.iter_mut().filter(|v| **v == sentinel) {
        *value = f64::NAN;
        masked += 1;
    }
    masked
}

/// Sentinel as it would have been stored in a file of the given layout
///
/// Single-precision files hold the sentinel rounded to `f32`, so the
/// comparison must use the rounded value.
pub fn stored_sentinel(sentinel: f64, layout: &SampleLayout) -> f64 {
    match layout.width {
        ElementWidth::Single => sentinel as f32 as f64,
        ElementWidth::Double => sentinel,
    }
}
