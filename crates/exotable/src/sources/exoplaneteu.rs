//! exoplanet.eu catalog (CSV download).

use crate::error::Result;
use crate::mapping::SourceMapping;
use crate::registry::ColumnRegistry;
use crate::units::labels::*;
use crate::units::{NO_UNIT, UNITLESS};

use super::definition::{LoadOptions, SourceDefinition};

pub const NAME: &str = "exoplaneteu";

pub fn exoplanet_eu(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mut mapping = SourceMapping::builder(NAME, registry);
    mapping
        .unified("star_name", "st_name", NO_UNIT)?
        .unified("name", "pl_name", NO_UNIT)?
        .unified("omega", "pl_omega", DEGREE)?
        .unified("orbital_period", "pl_per", DAY)?
        .unified("orbital_period_error_min", "pl_per_err_inf", DAY)?
        .unified("orbital_period_error_max", "pl_per_err_sup", DAY)?
        .unified("tzero_tr", "t_tr", DAY)?
        .unified("tperi", "t_peri", DAY)?
        .unified("tconj", "t_ic", DAY)?
        .unified("eccentricity", "pl_ecc", UNITLESS)?
        .unified("inclination", "pl_inc", DEGREE)?
        .unified("semi_major_axis", "pl_a", AU)?
        .unified("impact_parameter", "b", UNITLESS)?
        .unified("radius", "pl_radj", JUPITER_RADIUS)?
        .unified("radius_detection_type", "pl_rad_orig", NO_UNIT)?
        .unified("mass", "pl_massj", JUPITER_MASS)?
        .unified("mass_error_min", "pl_massj_err_inf", JUPITER_MASS)?
        .unified("mass_error_max", "pl_massj_err_sup", JUPITER_MASS)?
        .unified("mass_sini", "pl_msinij", JUPITER_MASS)?
        .unified("mass_detection_type", "pl_mass_orig", NO_UNIT)?
        .unified("temp_calculated", "pl_teq", KELVIN)?
        .unified("star_radius", "st_rad", SOLAR_RADIUS)?
        .unified("star_mass", "st_mass", SOLAR_MASS)?
        .unified("star_teff", "st_teff", KELVIN)?
        .unified("st_vsini", "vsini", KM_PER_S)?
        .unified("mag_v", "mag_v", UNITLESS)?
        .unified("ra", "ra", DEGREE)?
        .unified("dec", "dec", DEGREE)?
        .unified("star_sp_type", "sp_type", NO_UNIT)?
        .unified("radius", "pl_radj", JUPITER_RADIUS)?
        .unified("radius_error_min", "pl_radj_err_inf", JUPITER_RADIUS)?
        .unified("radius_error_max", "pl_radj_err_sup", JUPITER_RADIUS)?
        .passthrough("planet_status", "Publication status of the planet", NO_UNIT)?
        .passthrough("discovered", "Year of discovery", NO_UNIT)?
        .passthrough("detection_type", "Detection method", NO_UNIT)?;

    Ok(SourceDefinition::new(
        mapping.build(),
        LoadOptions::new("exoplanet_eu/exoplanet.eu_catalog.csv"),
    ))
}
