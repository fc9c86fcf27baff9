//! TEPCat catalogs of transiting planets.
//!
//! The TEPCat CSV exports carry awkward header rows, so the well-studied,
//! little-studied and planning tables are read with explicit column names.
//! `System` mixes star and planet names; it is still mapped to `pl_name`
//! since it is the only identifier these files have.

use crate::error::Result;
use crate::mapping::SourceMapping;
use crate::registry::ColumnRegistry;
use crate::units::{NO_UNIT, UNITLESS};
use crate::units::labels::*;

use super::definition::{LoadOptions, SourceDefinition};

const FOLDER: &str = "TEPCat";

/// Columns of the well-studied and little-studied exports.
const PLANET_COLUMNS: &[&str] = &[
    "System", "Teff", "Teff_erru", "Teff_errd", "[Fe/H]", "[Fe/H]_erru", "[Fe/H]_errd",
    "M_A", "M_A_erru", "M_A_errd", "R_A", "R_A_erru", "R_A_errd", "loggA", "loggA_erru",
    "loggA_errd", "rho_A", "rho_A_erru", "rho_A_errd", "Period", "Period_err", "Period_erru",
    "Period_errd", "a(AU)", "a(AU)_erru", "a(AU)_errd", "M_b", "M_b_erru", "M_b_errd",
    "R_b", "R_b_erru", "R_b_errd", "g_b", "g_b_erru", "g_b_errd", "rho_b", "rho_b_erru",
    "rho_b_errd", "Teq", "Teq_erru", "Teq_errd", "Discovery_reference", "Recent_reference",
];

/// Columns of the observation planning export.
const PLANNING_COLUMNS: &[&str] = &[
    "System", "Type", "RA_h", "RA_m", "RA_s", "Dec_d", "Dec_m", "Dec_s", "V_mag", "K_mag",
    "length", "depth", "T0 (HJD or BJD)", "T0_err", "Period(day)", "Period_err",
    "Ephemeris_reference",
];

fn path(file: &str) -> String {
    format!("{}/{}", FOLDER, file)
}

/// Every TEPCat export is comma separated.
fn options(file: &str) -> LoadOptions {
    LoadOptions::new(path(file)).with_delimiter(b',').trimmed()
}

fn planet_options(file: &str) -> LoadOptions {
    options(file).with_header(PLANET_COLUMNS)
}

pub fn tepcat_well_studied(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mut mapping = SourceMapping::builder("tepcat well-studied", registry);
    mapping
        .unified("System", "pl_name", NO_UNIT)?
        .unified("Period", "pl_per", DAY)?
        .unified("a(AU)", "pl_a", AU)?
        .unified("R_b", "pl_radj", JUPITER_RADIUS)?
        .unified("M_b", "pl_massj", JUPITER_MASS)?
        .unified("rho_b", "pl_rhoj", JUPITER_DENSITY)?
        .unified("g_b", "pl_g", SURFACE_GRAVITY)?
        .unified("Teq", "pl_teq", KELVIN)?
        .unified("R_A", "st_rad", SOLAR_RADIUS)?
        .unified("M_A", "st_mass", SOLAR_MASS)?
        .unified("loggA", "st_logg", DEX)?
        .unified("Teff", "st_teff", KELVIN)?
        .unified("[Fe/H]", "st_metal", DEX)?
        .unified("rho_A", "st_rho", SOLAR_DENSITY)?
        .passthrough("Discovery_reference", "Discovery paper", NO_UNIT)?
        .passthrough("Recent_reference", "Most recent paper", NO_UNIT)?;

    Ok(SourceDefinition::new(
        mapping.build(),
        planet_options("well-studied/allplanets-csv.csv"),
    ))
}

pub fn tepcat_planning(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mut mapping = SourceMapping::builder("tepcat planning", registry);
    mapping
        .unified("System", "pl_name", NO_UNIT)?
        .unified("Period(day)", "pl_per", DAY)?
        .unified("T0 (HJD or BJD)", "t_tr", DAY)?
        .unified("length", "tr_dur", DAY)?
        .unified("V_mag", "mag_v", UNITLESS)?
        .passthrough("Ephemeris_reference", "Ephemeris paper", NO_UNIT)?;

    Ok(SourceDefinition::new(
        mapping.build(),
        options("obs_planning/observables.csv").with_header(PLANNING_COLUMNS),
    ))
}

/// Same layout as the well-studied table but no unification yet.
pub fn tepcat_little_studied(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mapping = SourceMapping::builder("tepcat little-studied", registry).build();
    Ok(SourceDefinition::new(
        mapping,
        planet_options("well-studied/kepplanets-csv.csv"),
    ))
}

pub fn tepcat_homogeneous_meas(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mapping = SourceMapping::builder("tepcat homogeneous-meas", registry).build();
    Ok(SourceDefinition::new(
        mapping,
        options("homogeneous/homogeneous-input-csv.csv"),
    ))
}

pub fn tepcat_homogeneous_phys(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mapping = SourceMapping::builder("tepcat homogeneous-phys", registry).build();
    Ok(SourceDefinition::new(
        mapping,
        options("homogeneous/homogeneous-par-csv.csv"),
    ))
}

pub fn tepcat_obliquity(registry: &ColumnRegistry) -> Result<SourceDefinition> {
    let mapping = SourceMapping::builder("tepcat obliquity", registry).build();
    Ok(SourceDefinition::new(
        mapping,
        options("obliquity/obliquity.csv"),
    ))
}
