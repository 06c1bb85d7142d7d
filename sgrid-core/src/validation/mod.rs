//! Validation utilities for the SGrid format
//!
//! This module contains pure validation and token parsing functions with no
//! I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_count, layout_fits, CountCheck};
pub use parsing::{parse_counts, parse_vec3, strip_quotes};
