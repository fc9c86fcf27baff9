//! NASA Exoplanet Archive planets table (CSV export).

use crate::error::Result;
use crate::mapping::SourceMapping;
use crate::registry::ColumnRegistry;
use crate::units::labels::*;
use crate::units::{NO_UNIT, UNITLESS};

use super::definition::{LoadOptions, SourceDefinition};

pub const NAME: &str = "exoplanetarchive";

pub fn exoplanet_archive(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mut mapping = SourceMapping::builder(NAME, registry);
    mapping
        .unified("pl_hostname", "st_name", NO_UNIT)?
        .unified("pl_name", "pl_name", NO_UNIT)?
        .unified("pl_orbper", "pl_per", DAY)?
        .unified("tzero_tr", "t_tr", DAY)?
        .unified("tperi", "t_peri", DAY)?
        .unified("pl_tranmid", "t_ic", DAY)?
        .unified("pl_orbincl", "pl_inc", DEGREE)?
        .unified("pl_orbsmax", "pl_a", AU)?
        .unified("pl_tranflag", "transiting?", NO_UNIT)?
        .unified("pl_trandur", "tr_dur", DAY)?
        .unified("pl_trandep", "tr_depth", PERCENT)?
        .unified("pl_occdep", "occ_depth", PERCENT)?
        .unified("pl_imppar", "b", UNITLESS)?
        .unified("pl_ratdor", "pl_aR", UNITLESS)?
        .unified("pl_radj", "pl_radj", JUPITER_RADIUS)?
        .unified("radius_detection_type", "pl_rad_orig", NO_UNIT)?
        .unified("pl_massj", "pl_massj", JUPITER_MASS)?
        .unified("mass_sini", "pl_msinij", JUPITER_MASS)?
        .unified("pl_bmassprov", "pl_mass_orig", NO_UNIT)?
        .unified("pl_eqt", "pl_teq", KELVIN)?
        .unified("st_rad", "st_rad", SOLAR_RADIUS)?
        .unified("st_mass", "st_mass", SOLAR_MASS)?
        .unified("st_teff", "st_teff", KELVIN)?
        .unified("st_vsini", "vsini", KM_PER_S)?
        .unified("st_spstr", "sp_type", NO_UNIT)?
        .unified("st_vj", "mag_v", UNITLESS)?
        .unified("ra", "ra", DEGREE)?
        .unified("dec", "dec", DEGREE)?
        .unified("st_plx", "plx", MAS)?
        .unified("st_pmra", "pm_ra", MAS_PER_YEAR)?
        .unified("st_pmdec", "pm_dec", MAS_PER_YEAR)?
        .passthrough("pl_discmethod", "Discovery method", NO_UNIT)?
        .passthrough("pl_pnum", "Number of planets in the system", UNITLESS)?;

    Ok(SourceDefinition::new(
        mapping.build(),
        LoadOptions::new("exoplanet_archive/planets.csv").with_comment(b'#'),
    ))
}
