//! Format definitions for SGrid files
//!
//! This module contains pure data structure definitions for grid headers and
//! property files. No I/O operations, only format definitions.

pub mod constants;
pub mod geometry;
pub mod layout;
pub mod property;

// Re-export format definitions
pub use geometry::{axis_spacing, grid_spacing, Dimensions, GridGeometry, Vec3};
pub use layout::{ByteOrder, ElementWidth, SampleLayout, CANDIDATE_LAYOUTS};
pub use property::{HeaderMetadata, PropertyDescriptor, PropertyRegistry};
