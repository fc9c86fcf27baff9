//! The standard exoplanet column vocabulary.

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::units::labels::*;
use crate::units::{NO_UNIT, UNITLESS, Unit};

use super::canonical::ColumnRegistry;

// =============================================================================
// VOCABULARY
// =============================================================================
// (name, description, expected unit label)

const STANDARD_COLUMNS: &[(&str, &str, &str)] = &[
    // Names
    ("st_name", "Host star name", NO_UNIT),
    ("pl_name", "Planet name", NO_UNIT),
    // Planet orbital elements
    ("pl_per", "Planetary orbital period", DAY),
    ("pl_per_err_inf", "Inferior error bar on the planetary orbital period", DAY),
    ("pl_per_err_sup", "Superior error bar on the planetary orbital period", DAY),
    ("pl_omega", "*Stellar* orbital argument of periastron corresponding to the planetary one", DEGREE),
    ("t_ic", "Planetary time of inferior conjunction", DAY),
    ("t_tr", "Planetary transit time", DAY),
    ("t_peri", "Planetary periastron passage", DAY),
    ("pl_inc", "Planet orbital inclination", DEGREE),
    ("pl_a", "Planet orbital semi-major axis", AU),
    ("pl_ecc", "Planetary orbital eccentricity", UNITLESS),
    // Planet transit parameters
    ("tr_dur", "Planetary transit duration", DAY),
    ("b", "Planetary impact parameter", UNITLESS),
    ("transiting?", "Planet Transit Flag", NO_UNIT),
    ("tr_depth", "Planetary transit depth", PERCENT),
    ("occ_depth", "Planetary occultation depth", PERCENT),
    ("pl_aR", "Planetary orbital semi-major axis over the stellar radius", UNITLESS),
    // Planet physical parameters
    ("pl_massj", "Planetary mass", JUPITER_MASS),
    ("pl_massj_err_inf", "Inferior error bar on the planetary mass", JUPITER_MASS),
    ("pl_massj_err_sup", "Superior error bar on the planetary mass", JUPITER_MASS),
    ("pl_msinij", "Planetary mass multiplied by the sin of the orbital inclination", JUPITER_MASS),
    ("pl_mass_orig", "Origin of the planetary mass", NO_UNIT),
    ("pl_radj", "Planetary radius", JUPITER_RADIUS),
    ("pl_radj_err_inf", "Inferior error bar on planetary radius", JUPITER_RADIUS),
    ("pl_radj_err_sup", "Superior error bar on planetary radius", JUPITER_RADIUS),
    ("pl_rad_orig", "Origin of the planetary radius", NO_UNIT),
    ("pl_g", "Planetary surface gravity", SURFACE_GRAVITY),
    ("pl_rhoj", "Planetary mean density", JUPITER_DENSITY),
    ("pl_teq", "Planetary equilibrium temperature", KELVIN),
    // Stellar physical parameters
    ("st_teff", "Stellar effective temperature", KELVIN),
    ("sp_type", "Stellar spectral type", NO_UNIT),
    ("st_logg", "Stellar log of the surface gravity", DEX),
    ("st_metal", "Stellar metallicity", DEX),
    ("st_mass", "Stellar mass", SOLAR_MASS),
    ("st_rad", "Stellar radius", SOLAR_RADIUS),
    ("st_rho", "Stellar mean density", SOLAR_DENSITY),
    // Stellar rotation
    ("vsini", "Stellar radial velocity rotational broadening", KM_PER_S),
    // Sky position
    ("ra", "Stellar right ascension (J2000)", DEGREE),
    ("dec", "Stellar declination (J2000)", DEGREE),
    ("pm_ra", "Stellar proper motion in right ascension", MAS_PER_YEAR),
    ("pm_dec", "Stellar proper motion in declination", MAS_PER_YEAR),
    ("plx", "Stellar parallax", MAS),
    // Magnitudes
    ("mag_v", "Stellar magnitude in the V band", UNITLESS),
];

static STANDARD: Lazy<ColumnRegistry> = Lazy::new(|| {
    ColumnRegistry::from_definitions(STANDARD_COLUMNS.iter().copied())
        .expect("standard vocabulary has unique names")
});

impl ColumnRegistry {
    /// Build a registry from `(name, description, unit label)` triples.
    pub fn from_definitions<'a>(
        definitions: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) -> Result<Self> {
        let mut registry = ColumnRegistry::new();
        for (name, description, unit) in definitions {
            registry.register(name, description, Unit::parse(unit))?;
        }
        Ok(registry)
    }

    /// The process-wide exoplanet vocabulary.
    ///
    /// Built on first use and never mutated afterwards.
    pub fn standard() -> &'static ColumnRegistry {
        &STANDARD
    }
}
