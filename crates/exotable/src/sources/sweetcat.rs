//! SWEET-Cat stellar parameters for planet hosts.

use crate::error::Result;
use crate::mapping::SourceMapping;
use crate::registry::ColumnRegistry;
use crate::units::labels::*;
use crate::units::{NO_UNIT, UNITLESS};

use super::definition::{LoadOptions, SourceDefinition};

pub const NAME: &str = "sweetcat";

pub fn sweetcat(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mut mapping = SourceMapping::builder(NAME, registry);
    mapping
        .unified("star", "st_name", NO_UNIT)?
        .unified("mass", "st_mass", SOLAR_MASS)?
        .unified("teff", "st_teff", KELVIN)?
        .unified("metal", "st_metal", DEX)?
        .unified("logg", "st_logg", DEX)?
        .unified("vmag", "mag_v", UNITLESS)?
        .unified("ra", "ra", DEGREE)?
        .unified("dec", "dec", DEGREE)?
        .unified("par", "plx", MAS)?;

    Ok(SourceDefinition::new(
        mapping.build(),
        LoadOptions::new("sweetcat/sweetcat.tsv").trimmed(),
    ))
}
