//! Read configuration for SGrid property loading

use sgrid_core::format::constants::{BINARY_SUFFIX, TEXT_PREAMBLE_LINES};
use sgrid_core::{BinaryOptions, ByteOrder, ElementWidth};

/// Configuration for property decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadConfig {
    /// File name suffix marking binary property files
    pub binary_suffix: String,
    /// Lines skipped at the top of text property files
    pub text_preamble_lines: usize,
    /// Fall back to a count-mismatched layout when nothing matches exactly
    pub relaxed_fallback: bool,
    /// Load binary files through a memory map
    pub use_mmap: bool,
    /// Only consider this element width for binary files
    pub element_width: Option<ElementWidth>,
    /// Only consider this byte order for binary files
    pub byte_order: Option<ByteOrder>,
}

impl ReadConfig {
    /// Strict config: count mismatches become decode errors
    pub fn strict() -> Self {
        Self::default().with_relaxed_fallback(false)
    }

    /// Set the binary marker suffix
    pub fn with_binary_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.binary_suffix = suffix.into();
        self
    }

    /// Set the number of text preamble lines
    pub fn with_text_preamble_lines(mut self, lines: usize) -> Self {
        self.text_preamble_lines = lines;
        self
    }

    /// Enable or disable the relaxed decode pass
    pub fn with_relaxed_fallback(mut self, relaxed: bool) -> Self {
        self.relaxed_fallback = relaxed;
        self
    }

    /// Enable or disable memory-mapped loading
    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Pin the binary element width
    pub fn with_element_width(mut self, width: ElementWidth) -> Self {
        self.element_width = Some(width);
        self
    }

    /// Pin the binary byte order
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = Some(order);
        self
    }

    /// Layout inference options derived from this config
    pub fn binary_options(&self) -> BinaryOptions {
        BinaryOptions {
            relaxed: self.relaxed_fallback,
            width: self.element_width,
            order: self.byte_order,
        }
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            binary_suffix: BINARY_SUFFIX.to_string(),
            text_preamble_lines: TEXT_PREAMBLE_LINES,
            relaxed_fallback: true,
            use_mmap: cfg!(feature = "mmap"),
            element_width: None,
            byte_order: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReadConfig::default();
        assert_eq!(config.binary_suffix, "@@");
        assert_eq!(config.text_preamble_lines, 3);
        assert!(config.relaxed_fallback);
        assert_eq!(config.binary_options(), BinaryOptions::default());
    }

    #[test]
    fn test_builder() {
        let config = ReadConfig::strict()
            .with_byte_order(ByteOrder::Big)
            .with_element_width(ElementWidth::Double)
            .with_text_preamble_lines(0);
        let options = config.binary_options();
        assert!(!options.relaxed);
        assert_eq!(options.order, Some(ByteOrder::Big));
        assert_eq!(options.width, Some(ElementWidth::Double));
        assert_eq!(config.text_preamble_lines, 0);
    }
}
