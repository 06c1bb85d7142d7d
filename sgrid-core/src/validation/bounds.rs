//! Sample count validation for SGrid property payloads
//!
//! Pure checks relating decoded element counts to the grid cell count.

use crate::format::SampleLayout;

/// How a decoded element count relates to the expected cell count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountCheck {
    /// Count equals the grid cell count
    Exact,
    /// Grid dimensions unknown, count cannot be validated
    Unvalidated,
    /// Count differs from the grid cell count
    Mismatch { decoded: usize, expected: u64 },
}

/// Compare a decoded count with the expected cell count
pub fn check_count(decoded: usize, expected: Option<u64>) -> CountCheck {
    match expected {
        None => CountCheck::Unvalidated,
        Some(expected) if decoded as u64 == expected => CountCheck::Exact,
        Some(expected) => CountCheck::Mismatch { decoded, expected },
    }
}

/// Whether a layout could produce exactly `expected` elements from `byte_len` bytes
///
/// Lets the decoder skip full decodes for candidates that cannot match.
pub fn layout_fits(layout: &SampleLayout, byte_len: usize, expected: u64) -> bool {
    layout
        .element_count(byte_len)
        .is_some_and(|count| count as u64 == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CANDIDATE_LAYOUTS;

    #[test]
    fn test_check_count() {
        assert_eq!(check_count(1000, Some(1000)), CountCheck::Exact);
        assert_eq!(check_count(10, None), CountCheck::Unvalidated);
        assert_eq!(
            check_count(500, Some(1000)),
            CountCheck::Mismatch {
                decoded: 500,
                expected: 1000
            }
        );
    }

    #[test]
    fn test_layout_fits() {
        let single = CANDIDATE_LAYOUTS[0];
        let double = CANDIDATE_LAYOUTS[2];
        assert!(layout_fits(&single, 4000, 1000));
        assert!(!layout_fits(&double, 4000, 1000));
        assert!(layout_fits(&double, 8000, 1000));
        assert!(!layout_fits(&single, 4002, 1000));
    }
}
