//! Property-based tests for the registry and the merge engine.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p exotable --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p exotable --test property_tests
//! ```

use std::collections::BTreeSet;

use proptest::prelude::*;

use exotable::{
    ColumnRegistry, DataTable, ExoError, ExoTable, JoinHow, MergeSpec, SourceMapping, Unit,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Distinct column names for a registry.
fn column_names() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z][a-z_]{0,11}", 1..30)
}

/// Distinct planet names drawn from a small pool so that tables overlap.
fn planet_keys() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[A-D]-[0-9]", 0..20)
}

fn planet_registry() -> ColumnRegistry {
    ColumnRegistry::from_definitions([("pl_name", "Planet name", "N/A")]).unwrap()
}

/// One-source table keyed on `pl_name`.
fn table(source: &str, keys: &BTreeSet<String>) -> ExoTable {
    let registry = planet_registry();
    let mut builder = SourceMapping::builder(source, &registry);
    builder.unified("name", "pl_name", "N/A").unwrap();
    let raw = DataTable::from_rows(
        ["name", "value"],
        keys.iter().map(|k| [k.clone(), format!("{}-{}", source, k)]),
    );
    ExoTable::from_source(&raw, &builder.build(), true).unwrap()
}

// =============================================================================
// Registry
// =============================================================================

proptest! {
    /// Every registered column is returned unchanged by lookup.
    #[test]
    fn registry_lookup_is_identity(names in column_names()) {
        let mut registry = ColumnRegistry::new();
        for name in &names {
            registry
                .register(name, &format!("About {}", name), Unit::named("d"))
                .unwrap();
        }

        prop_assert_eq!(registry.len(), names.len());
        for name in &names {
            let column = registry.lookup(name).unwrap();
            prop_assert_eq!(&column.name, name);
            prop_assert_eq!(&column.description, &format!("About {}", name));
            prop_assert_eq!(&column.expected_unit, &Unit::named("d"));
        }
    }

    /// Registering a name twice always fails, whatever the payload.
    #[test]
    fn registry_rejects_duplicates(names in column_names(), description in ".{0,20}") {
        let mut registry = ColumnRegistry::new();
        for name in &names {
            registry.register(name, "", Unit::NoUnit).unwrap();
        }
        for name in &names {
            let result = registry.register(name, &description, Unit::Unitless);
            prop_assert!(matches!(result, Err(ExoError::DuplicateName(_))));
        }
        prop_assert_eq!(registry.len(), names.len());
    }
}

// =============================================================================
// Merge
// =============================================================================

proptest! {
    /// Outer joins keep every row of both sides, pairing equal keys.
    #[test]
    fn outer_merge_row_bounds(left in planet_keys(), right in planet_keys()) {
        let a = table("a", &left);
        let b = table("b", &right);

        let merged = a.merge(&b, &MergeSpec::default()).unwrap();

        let union = left.union(&right).count();
        prop_assert!(merged.row_count() >= left.len().max(right.len()));
        prop_assert!(merged.row_count() <= left.len() + right.len());
        prop_assert_eq!(merged.row_count(), union);
        prop_assert_eq!(merged.column_info().len(), merged.column_count());
    }

    /// Row counts of the other join types follow the key overlap.
    #[test]
    fn join_types_row_counts(left in planet_keys(), right in planet_keys()) {
        let a = table("a", &left);
        let b = table("b", &right);
        let count = |how| a.merge(&b, &MergeSpec::new().how(how)).unwrap().row_count();

        prop_assert_eq!(count(JoinHow::Inner), left.intersection(&right).count());
        prop_assert_eq!(count(JoinHow::Left), left.len());
        prop_assert_eq!(count(JoinHow::Right), right.len());
    }

    /// Sources accumulate left to right, and none can be added twice.
    #[test]
    fn source_bookkeeping(
        ka in planet_keys(),
        kb in planet_keys(),
        kc in planet_keys(),
    ) {
        let (a, b, c) = (table("a", &ka), table("b", &kb), table("c", &kc));
        let spec = MergeSpec::default();

        let ab = a.merge(&b, &spec).unwrap();
        let abc = ab.merge(&c, &spec).unwrap();
        prop_assert_eq!(abc.sources(), &["a".to_string(), "b".to_string(), "c".to_string()]);

        let bc = b.merge(&c, &spec).unwrap();
        let a_bc = a.merge(&bc, &spec).unwrap();
        prop_assert_eq!(a_bc.sources(), abc.sources());

        // Directly and transitively
        prop_assert!(matches!(abc.merge(&b, &spec), Err(ExoError::AlreadyMerged(_))));
        prop_assert!(matches!(a.merge(&ab, &spec), Err(ExoError::AlreadyMerged(_))));
        prop_assert!(matches!(ab.merge(&bc, &spec), Err(ExoError::AlreadyMerged(_))));
    }

    /// Merging never modifies its inputs.
    #[test]
    fn merge_leaves_inputs_untouched(left in planet_keys(), right in planet_keys()) {
        let a = table("a", &left);
        let b = table("b", &right);
        let (a_before, b_before) = (a.data().clone(), b.data().clone());

        let _ = a.merge(&b, &MergeSpec::default()).unwrap();

        prop_assert_eq!(a.data(), &a_before);
        prop_assert_eq!(b.data(), &b_before);
        prop_assert_eq!(a.sources(), &["a".to_string()]);
    }
}
