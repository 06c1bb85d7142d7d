//! Binary property payload decoding
//!
//! Binary property files are raw IEEE-754 arrays with no type tag. The
//! layout is inferred by running an ordered table of decode strategies in
//! two passes:
//!
//! 1. **Strict**: the first strategy whose element count equals the grid
//!    cell count wins. If the cell count is unknown, the first strategy that
//!    decodes at all wins and the count is reported as unvalidated.
//! 2. **Relaxed**: if the strict pass found nothing, the first strategy that
//!    decodes to a non-empty array wins and the mismatch is reported.

use crate::diagnostic::{Diagnosed, Diagnostic};
use crate::error::{DecodeError, Result};
use crate::format::{ByteOrder, ElementWidth, SampleLayout};
use crate::traits::{decode_samples, SampleElement};
use crate::validation::{check_count, layout_fits, CountCheck};

/// A pure decode function for one sample layout
pub type DecodeFn = fn(&[u8]) -> Result<Vec<f64>>;

/// One entry of the strategy table
#[derive(Clone, Copy)]
pub struct Strategy {
    pub layout: SampleLayout,
    pub decode: DecodeFn,
}

fn decode_with<T: SampleElement>(bytes: &[u8], order: ByteOrder) -> Result<Vec<f64>> {
    decode_samples::<T>(bytes, order).ok_or(DecodeError::Misaligned {
        byte_len: bytes.len(),
        width: T::size_bytes(),
    })
}

fn f32_le(bytes: &[u8]) -> Result<Vec<f64>> {
    decode_with::<f32>(bytes, ByteOrder::Little)
}

fn f32_be(bytes: &[u8]) -> Result<Vec<f64>> {
    decode_with::<f32>(bytes, ByteOrder::Big)
}

fn f64_le(bytes: &[u8]) -> Result<Vec<f64>> {
    decode_with::<f64>(bytes, ByteOrder::Little)
}

fn f64_be(bytes: &[u8]) -> Result<Vec<f64>> {
    decode_with::<f64>(bytes, ByteOrder::Big)
}

/// Decode strategies in priority order
pub const STRATEGIES: [Strategy; 4] = [
    Strategy {
        layout: SampleLayout::new(ElementWidth::Single, ByteOrder::Little),
        decode: f32_le,
    },
    Strategy {
        layout: SampleLayout::new(ElementWidth::Single, ByteOrder::Big),
        decode: f32_be,
    },
    Strategy {
        layout: SampleLayout::new(ElementWidth::Double, ByteOrder::Little),
        decode: f64_le,
    },
    Strategy {
        layout: SampleLayout::new(ElementWidth::Double, ByteOrder::Big),
        decode: f64_be,
    },
];

/// Knobs for binary layout inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryOptions {
    /// Run the relaxed pass when no layout matches the cell count
    pub relaxed: bool,
    /// Only consider this element width
    pub width: Option<ElementWidth>,
    /// Only consider this byte order
    pub order: Option<ByteOrder>,
}

impl BinaryOptions {
    /// Whether a layout survives the width/order pins
    pub fn admits(&self, layout: &SampleLayout) -> bool {
        self.width.map_or(true, |w| w == layout.width)
            && self.order.map_or(true, |o| o == layout.order)
    }
}

impl Default for BinaryOptions {
    fn default() -> Self {
        Self {
            relaxed: true,
            width: None,
            order: None,
        }
    }
}

/// Values decoded from a binary payload with the layout that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryDecoded {
    pub values: Vec<f64>,
    pub layout: SampleLayout,
}

/// Infer the layout of a binary payload and decode it
///
/// `expected` is the grid cell count, `None` when dimensions are unknown.
pub fn decode_binary(
    bytes: &[u8],
    expected: Option<u64>,
    options: &BinaryOptions,
) -> Result<Diagnosed<BinaryDecoded>> {
    let candidates: Vec<&Strategy> = STRATEGIES
        .iter()
        .filter(|s| options.admits(&s.layout))
        .collect();

    for strategy in &candidates {
        // Skip layouts that cannot produce the expected count
        if expected.is_some_and(|e| !layout_fits(&strategy.layout, bytes.len(), e)) {
            continue;
        }
        let Ok(values) = (strategy.decode)(bytes) else {
            continue;
        };
        let layout = strategy.layout;
        match check_count(values.len(), expected) {
            CountCheck::Exact => return Ok(Diagnosed::clean(BinaryDecoded { values, layout })),
            CountCheck::Unvalidated => {
                let decoded = values.len();
                return Ok(Diagnosed::with(
                    BinaryDecoded { values, layout },
                    Diagnostic::UnvalidatedCount { layout, decoded },
                ));
            }
            CountCheck::Mismatch { .. } => continue,
        }
    }

    if let (Some(expected), true) = (expected, options.relaxed) {
        for strategy in &candidates {
            let Ok(values) = (strategy.decode)(bytes) else {
                continue;
            };
            if values.is_empty() {
                continue;
            }
            let layout = strategy.layout;
            let decoded = values.len();
            return Ok(Diagnosed::with(
                BinaryDecoded { values, layout },
                Diagnostic::CountMismatch {
                    layout,
                    decoded,
                    expected,
                },
            ));
        }
    }

    Err(DecodeError::NoMatchingLayout {
        byte_len: bytes.len(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CANDIDATE_LAYOUTS;
    use crate::traits::encode_samples;

    fn ramp(n: usize) -> Vec<f32> {
        (0..n).map(|i| i as f32 * 0.5 - 3.0).collect()
    }

    #[test]
    fn test_strategy_table_matches_candidates() {
        let layouts: Vec<SampleLayout> = STRATEGIES.iter().map(|s| s.layout).collect();
        assert_eq!(layouts, CANDIDATE_LAYOUTS.to_vec());
    }

    #[test]
    fn test_strict_single_little() {
        let source = ramp(1000);
        let bytes = encode_samples(&source, ByteOrder::Little);
        let decoded = decode_binary(&bytes, Some(1000), &BinaryOptions::default()).unwrap();

        assert!(decoded.is_clean());
        assert_eq!(decoded.value.layout, CANDIDATE_LAYOUTS[0]);
        let widened: Vec<f64> = source.iter().map(|&v| v as f64).collect();
        assert_eq!(decoded.value.values, widened);
    }

    #[test]
    fn test_strict_prefers_double_when_count_matches() {
        let source: Vec<f64> = (0..10).map(|i| i as f64 / 3.0).collect();
        let bytes = encode_samples(&source, ByteOrder::Little);
        // 80 bytes is 20 singles or 10 doubles
        let decoded = decode_binary(&bytes, Some(10), &BinaryOptions::default()).unwrap();

        assert!(decoded.is_clean());
        assert_eq!(decoded.value.layout.width, ElementWidth::Double);
        assert_eq!(decoded.value.values, source);
    }

    #[test]
    fn test_unknown_count_takes_first_layout() {
        let bytes = encode_samples(&ramp(6), ByteOrder::Little);
        let decoded = decode_binary(&bytes, None, &BinaryOptions::default()).unwrap();

        assert_eq!(decoded.value.layout, CANDIDATE_LAYOUTS[0]);
        assert_eq!(
            decoded.diagnostics,
            vec![Diagnostic::UnvalidatedCount {
                layout: CANDIDATE_LAYOUTS[0],
                decoded: 6
            }]
        );
    }

    #[test]
    fn test_relaxed_pass_reports_mismatch() {
        let bytes = encode_samples(&ramp(12), ByteOrder::Little);
        let decoded = decode_binary(&bytes, Some(1000), &BinaryOptions::default()).unwrap();

        assert_eq!(decoded.value.values.len(), 12);
        assert_eq!(
            decoded.diagnostics,
            vec![Diagnostic::CountMismatch {
                layout: CANDIDATE_LAYOUTS[0],
                decoded: 12,
                expected: 1000
            }]
        );
    }

    #[test]
    fn test_relaxed_pass_disabled() {
        let bytes = encode_samples(&ramp(12), ByteOrder::Little);
        let options = BinaryOptions {
            relaxed: false,
            ..BinaryOptions::default()
        };
        assert_eq!(
            decode_binary(&bytes, Some(1000), &options),
            Err(DecodeError::NoMatchingLayout {
                byte_len: 48,
                expected: Some(1000)
            })
        );
    }

    #[test]
    fn test_no_layout_decodes() {
        let bytes = [0u8; 7];
        assert_eq!(
            decode_binary(&bytes, Some(2), &BinaryOptions::default()),
            Err(DecodeError::NoMatchingLayout {
                byte_len: 7,
                expected: Some(2)
            })
        );
        assert_eq!(
            decode_binary(&bytes, None, &BinaryOptions::default()),
            Err(DecodeError::NoMatchingLayout {
                byte_len: 7,
                expected: None
            })
        );
    }

    #[test]
    fn test_empty_payload() {
        // Nothing to relax onto when the count is known
        assert!(decode_binary(&[], Some(4), &BinaryOptions::default()).is_err());

        let decoded = decode_binary(&[], None, &BinaryOptions::default()).unwrap();
        assert!(decoded.value.values.is_empty());
        assert!(!decoded.is_clean());
    }

    #[test]
    fn test_pinned_big_endian() {
        let source = ramp(8);
        let bytes = encode_samples(&source, ByteOrder::Big);
        let options = BinaryOptions {
            order: Some(ByteOrder::Big),
            ..BinaryOptions::default()
        };
        let decoded = decode_binary(&bytes, Some(8), &options).unwrap();

        assert_eq!(decoded.value.layout, CANDIDATE_LAYOUTS[1]);
        let widened: Vec<f64> = source.iter().map(|&v| v as f64).collect();
        assert_eq!(decoded.value.values, widened);
    }

    #[test]
    fn test_pinned_width_excludes_others() {
        let bytes = encode_samples(&ramp(8), ByteOrder::Little);
        let options = BinaryOptions {
            width: Some(ElementWidth::Double),
            relaxed: false,
            ..BinaryOptions::default()
        };
        assert!(decode_binary(&bytes, Some(8), &options).is_err());
        assert!(options.admits(&CANDIDATE_LAYOUTS[3]));
        assert!(!options.admits(&CANDIDATE_LAYOUTS[0]));
    }
}
