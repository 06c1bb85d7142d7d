//! SGrid Core - GOCAD Structured Grid Format Definitions
//!
//! This crate provides the format definitions, header parser and sample
//! decoders for GOCAD SGrid files. It performs no I/O: callers hand in
//! header text and property file contents.

pub mod decode;
pub mod diagnostic;
pub mod error;
pub mod format;
pub mod header;
pub mod traits;
pub mod validation;

pub use decode::{decode_binary, decode_text, mask_no_data, BinaryDecoded, BinaryOptions};
pub use diagnostic::{Diagnosed, Diagnostic};
pub use error::*;
pub use format::*;
pub use header::{parse_header, SgHeader};
pub use traits::*;
