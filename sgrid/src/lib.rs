//! SGrid - GOCAD Structured Grid Reader
//!
//! This library reads GOCAD SGrid headers and decodes the per-cell property
//! files they reference, inferring the sample width and byte order of
//! binary files and masking "no data" sentinels as NaN.
//!
//! ## Architecture
//!
//! SGrid follows a format/implementation separation:
//!
//! - **sgrid-core**: Header parser, sample layouts, and decoders (no I/O)
//! - **sgrid**: File loading, memory mapping, the reader, and batch reads
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sgrid::{ReadConfig, SgReader};
//!
//! fn example() -> Result<(), sgrid::SgError> {
//!     let reader = SgReader::open("model.sg")?;
//!     println!("{}", reader.summary());
//!
//!     // Decode one property; diagnostics describe any inference fallback
//!     let density = reader.read("1")?;
//!     for diagnostic in &density.diagnostics {
//!         eprintln!("warning: {diagnostic}");
//!     }
//!     println!("{} cells", density.value.len());
//!
//!     // Decode everything, skipping properties that fail
//!     let strict = SgReader::open_with_config("model.sg", ReadConfig::strict())?;
//!     let batch = strict.read_all();
//!     println!("{}/{} properties read", batch.succeeded(), batch.attempted);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): Binary property files are read through a memory map
//! - **serde** (default): Serialization for the data model and JSON summaries

pub use sgrid_core::{
    // Header model
    parse_header, Dimensions, GridGeometry, HeaderMetadata, PropertyDescriptor, PropertyRegistry,
    SgHeader, Vec3,
    // Sample layouts
    ByteOrder, ElementWidth, SampleLayout, CANDIDATE_LAYOUTS,
    // Diagnostics and errors
    DecodeError, Diagnosed, Diagnostic,
};

pub mod config;
pub mod error;
pub mod property_file;
pub mod reader;
pub mod summary;

pub use config::ReadConfig;
pub use error::{Result, SgError};
pub use property_file::{DecodedProperty, Encoding};
pub use reader::{BatchRead, SgReader};
pub use summary::{FileKind, GridSummary, PropertySummary};
