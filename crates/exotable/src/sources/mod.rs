//! Built-in exoplanet catalogs.
//!
//! Each catalog is described by a builder function returning a plain
//! [`SourceDefinition`]: its column mapping onto the standard vocabulary and
//! the options needed to read its file.

mod definition;
mod exoplanetarchive;
mod exoplaneteu;
mod sweetcat;
mod tepcat;

pub use definition::{Catalog, LoadOptions, SourceDefinition};
pub use exoplanetarchive::exoplanet_archive;
pub use exoplaneteu::exoplanet_eu;
pub use sweetcat::sweetcat;
pub use tepcat::{
    tepcat_homogeneous_meas, tepcat_homogeneous_phys, tepcat_little_studied, tepcat_obliquity,
    tepcat_planning, tepcat_well_studied,
};

use crate::error::Result;
use crate::registry::ColumnRegistry;

/// Every built-in source, in a stable order.
pub fn builtin_sources(registry: &ColumnRegistry) -> Result<Vec<SourceDefinition>> {
    Ok(vec![
        exoplanet_eu(registry)?,
        exoplanet_archive(registry)?,
        sweetcat(registry)?,
        tepcat_well_studied(registry)?,
        tepcat_planning(registry)?,
        tepcat_little_studied(registry)?,
        tepcat_homogeneous_meas(registry)?,
        tepcat_homogeneous_phys(registry)?,
        tepcat_obliquity(registry)?,
    ])
}
