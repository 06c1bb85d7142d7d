//! Error types for SGrid decoding

/// Errors that can occur while decoding property samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No candidate sample layout could decode the payload
    NoMatchingLayout {
        /// Payload length in bytes
        byte_len: usize,
        /// Cell count implied by the grid dimensions, if known
        expected: Option<u64>,
    },
    /// A token in a text property file is not a number
    InvalidToken {
        /// 1-indexed line number within the file
        line: usize,
        /// Offending token
        token: String,
    },
    /// Payload length is not a multiple of the element width
    Misaligned {
        /// Payload length in bytes
        byte_len: usize,
        /// Element width in bytes
        width: usize,
    },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::NoMatchingLayout { byte_len, expected } => {
                write!(f, "no sample layout decodes {byte_len} bytes (expected values: ")?;
                match expected {
                    Some(count) => write!(f, "{count})"),
                    None => write!(f, "unknown)"),
                }
            }
            DecodeError::InvalidToken { line, token } => {
                write!(f, "invalid numeric token {token:?} on line {line}")
            }
            DecodeError::Misaligned { byte_len, width } => {
                write!(f, "{byte_len} bytes is not a multiple of {width}-byte elements")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for SGrid decoding
pub type Result<T> = core::result::Result<T, DecodeError>;
