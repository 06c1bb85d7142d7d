//! Abstract interfaces for the SGrid format

pub mod element;

pub use element::{decode_samples, encode_samples, SampleElement};
