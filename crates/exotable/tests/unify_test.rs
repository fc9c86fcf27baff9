//! Unification and metadata tests through the public API.

use exotable::{
    ColumnRegistry, DataTable, ExoError, ExoTable, MappingWarning, Missing, SourceMapping, Unit,
};

fn registry() -> ColumnRegistry {
    ColumnRegistry::from_definitions([
        ("pl_name", "Planet name", "N/A"),
        ("pl_per", "Planetary orbital period", "d"),
    ])
    .expect("Failed to build registry")
}

fn kepler_raw() -> DataTable {
    DataTable::from_rows(["name", "orbital_period"], [["Kepler-1b", "3.5"]])
}

// =============================================================================
// Renaming
// =============================================================================

#[test]
fn test_unify_renames_mapped_columns() {
    let registry = registry();
    let mut builder = SourceMapping::builder("demo", &registry);
    builder
        .unified("name", "pl_name", "N/A")
        .unwrap()
        .unified("orbital_period", "pl_per", "d")
        .unwrap();
    let mapping = builder.build();

    let table = ExoTable::from_source(&kepler_raw(), &mapping, true).expect("Unify failed");

    assert_eq!(table.columns(), &["pl_name".to_string(), "pl_per".to_string()]);
    assert_eq!(table.data().rows, vec![vec!["Kepler-1b", "3.5"]]);
    assert_eq!(table.column_info().len(), 2);
    assert!(table.column_info().iter().all(|e| e.unified));
    assert_eq!(table.column_info().unified_count(), 2);
}

#[test]
fn test_unit_mismatch_is_stored_verbatim() {
    let registry = registry();
    let mut builder = SourceMapping::builder("hourly", &registry);
    builder
        .unified("name", "pl_name", "N/A")
        .unwrap()
        .unified("orbital_period", "pl_per", "h")
        .unwrap();
    let mapping = builder.build();

    assert_eq!(mapping.warnings().len(), 1);
    assert!(matches!(
        &mapping.warnings()[0],
        MappingWarning::UnitMismatch { canonical_name, .. } if canonical_name == "pl_per"
    ));

    let table = ExoTable::from_source(&kepler_raw(), &mapping, true).expect("Unify failed");

    assert_eq!(
        table.unit("pl_per", Missing::Error).unwrap(),
        Some(&Unit::named("h"))
    );
    // Values are never converted
    assert_eq!(table.data().get(0, 1), Some("3.5"));
}

#[test]
fn test_description_of_unified_column_is_replaced() {
    let registry = registry();
    let mut builder = SourceMapping::builder("demo", &registry);
    builder
        .add_mapping("orbital_period", "pl_per", "Period in days", Unit::named("d"))
        .unwrap();
    let mapping = builder.build();

    assert!(matches!(
        mapping.warnings(),
        [MappingWarning::DescriptionIgnored { .. }]
    ));
    assert_eq!(
        mapping.by_source("orbital_period").unwrap().description,
        "Planetary orbital period"
    );
}

#[test]
fn test_unknown_canonical_column_rejected() {
    let registry = registry();
    let mut builder = SourceMapping::builder("demo", &registry);
    let err = builder.unified("radius", "pl_radj", "jupiterRad").unwrap_err();
    assert!(matches!(err, ExoError::UnknownCanonicalColumn { .. }));
}

#[test]
fn test_zero_mapped_columns() {
    let registry = registry();
    let mapping = SourceMapping::builder("bare", &registry).build();

    let table = ExoTable::from_source(&kepler_raw(), &mapping, true).expect("Unify failed");

    assert_eq!(table.columns(), &["name".to_string(), "orbital_period".to_string()]);
    for entry in table.column_info().iter() {
        assert!(!entry.unified);
        assert!(entry.description.is_empty());
        assert_eq!(entry.unit, Unit::Unspecified);
    }
}

#[test]
fn test_unify_twice_fails() {
    let registry = registry();
    let mut builder = SourceMapping::builder("demo", &registry);
    builder.unified("name", "pl_name", "N/A").unwrap();
    let mapping = builder.build();

    let mut table = ExoTable::new();
    table.load(kepler_raw(), &mapping, true).unwrap();

    let err = table.load(kepler_raw(), &mapping, true).unwrap_err();
    assert!(matches!(err, ExoError::NonEmptyTarget { .. }));
    assert_eq!(table.row_count(), 1);
}

// =============================================================================
// Metadata lookups
// =============================================================================

#[test]
fn test_lookups_single_and_many() {
    let registry = registry();
    let mut builder = SourceMapping::builder("demo", &registry);
    builder
        .unified("name", "pl_name", "N/A")
        .unwrap()
        .unified("orbital_period", "pl_per", "d")
        .unwrap();
    let table = ExoTable::from_source(&kepler_raw(), &builder.build(), true).unwrap();

    assert_eq!(
        table.description("pl_per", Missing::ReturnNone).unwrap(),
        Some("Planetary orbital period")
    );
    assert_eq!(
        table.units(["pl_name", "pl_per"], Missing::Error).unwrap(),
        vec![Some(&Unit::NoUnit), Some(&Unit::named("d"))]
    );
    assert_eq!(
        table.descriptions(["st_name"], Missing::ReturnNone).unwrap(),
        vec![None]
    );
    assert!(matches!(
        table.description("st_name", Missing::Error),
        Err(ExoError::ColumnNotFound(_))
    ));
}
