//! Exotable: column unification and merging for exoplanet catalogs.
//!
//! Public exoplanet catalogs describe the same quantities under different
//! column names. Exotable maps each catalog's native columns onto a shared
//! vocabulary of canonical names, records where every column came from, and
//! joins catalogs into one table while tracking which sources went in.
//!
//! # Core Principles
//!
//! - **Values are never touched**: unification renames, it does not convert
//! - **Full provenance**: every column carries its source, original name,
//!   description and unit
//! - **Each source once**: a table refuses a source it already contains
//!
//! # Example
//!
//! ```no_run
//! use exotable::{Catalog, CatalogConfig, MergeSpec};
//!
//! let catalog = Catalog::standard(CatalogConfig::default()).unwrap();
//! let eu = catalog.load("exoplaneteu", true).unwrap();
//! let merged = catalog
//!     .merge_into(&eu, "exoplanetarchive", true, &MergeSpec::default())
//!     .unwrap();
//!
//! println!("Rows: {}", merged.row_count());
//! println!("Sources: {:?}", merged.sources());
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod mapping;
pub mod registry;
pub mod schema;
pub mod sources;
pub mod transform;
pub mod units;

mod exotable;

pub use crate::exotable::{ExoTable, Missing};
pub use config::CatalogConfig;
pub use error::{ExoError, Result};
pub use input::{DataTable, DelimitedFile, SourceMetadata, TableLoader};
pub use mapping::{MappingWarning, SourceMapping};
pub use registry::{CanonicalColumn, ColumnRegistry};
pub use schema::{ColumnInfo, ColumnInfoEntry};
pub use sources::{Catalog, LoadOptions, SourceDefinition};
pub use transform::{JoinHow, JoinKeys, MergeSpec};
pub use units::Unit;
