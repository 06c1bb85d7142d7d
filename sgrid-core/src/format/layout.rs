//! Sample layout definitions for binary property files
//!
//! Binary property files carry no type tag, so the element width and byte
//! order are inferred by trying the layouts in [`CANDIDATE_LAYOUTS`].

/// Element widths a binary property file may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementWidth {
    /// 32-bit IEEE-754 float
    Single,
    /// 64-bit IEEE-754 float
    Double,
}

impl ElementWidth {
    /// Get the size in bytes for this width
    pub const fn size_bytes(self) -> usize {
        match self {
            ElementWidth::Single => 4,
            ElementWidth::Double => 8,
        }
    }
}

impl core::fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ElementWidth::Single => write!(f, "f32"),
            ElementWidth::Double => write!(f, "f64"),
        }
    }
}

/// Byte order of a binary property file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    Little,
    Big,
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteOrder::Little => write!(f, "little-endian"),
            ByteOrder::Big => write!(f, "big-endian"),
        }
    }
}

/// A concrete element width and byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleLayout {
    pub width: ElementWidth,
    pub order: ByteOrder,
}

impl SampleLayout {
    pub const fn new(width: ElementWidth, order: ByteOrder) -> Self {
        Self { width, order }
    }

    /// Number of elements a payload of `byte_len` bytes holds, if it divides evenly
    pub const fn element_count(&self, byte_len: usize) -> Option<usize> {
        let size = self.width.size_bytes();
        if byte_len % size != 0 {
            return None;
        }
        Some(byte_len / size)
    }
}

impl core::fmt::Display for SampleLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.width, self.order)
    }
}

/// Layouts tried when inferring a binary encoding, in priority order
pub const CANDIDATE_LAYOUTS: [SampleLayout; 4] = [
    SampleLayout::new(ElementWidth::Single, ByteOrder::Little),
    SampleLayout::new(ElementWidth::Single, ByteOrder::Big),
    SampleLayout::new(ElementWidth::Double, ByteOrder::Little),
    SampleLayout::new(ElementWidth::Double, ByteOrder::Big),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let widths: Vec<usize> = CANDIDATE_LAYOUTS
            .iter()
            .map(|l| l.width.size_bytes())
            .collect();
        assert_eq!(widths, vec![4, 4, 8, 8]);
        assert_eq!(CANDIDATE_LAYOUTS[0].order, ByteOrder::Little);
        assert_eq!(CANDIDATE_LAYOUTS[1].order, ByteOrder::Big);
    }

    #[test]
    fn test_element_count() {
        let single = CANDIDATE_LAYOUTS[0];
        let double = CANDIDATE_LAYOUTS[2];
        assert_eq!(single.element_count(4000), Some(1000));
        assert_eq!(double.element_count(4000), Some(500));
        assert_eq!(double.element_count(4004), None);
        assert_eq!(single.element_count(6), None);
        assert_eq!(single.element_count(0), Some(0));
    }
}
