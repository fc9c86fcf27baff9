//! Canonical column definitions and the registry holding them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ExoError, Result};
use crate::units::Unit;

/// A unified column name with fixed meaning and expected unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalColumn {
    /// Unique column name.
    pub name: String,
    /// Human-readable description of the content.
    pub description: String,
    /// Unit every source should provide for this column.
    pub expected_unit: Unit,
}

impl CanonicalColumn {
    pub fn new(name: impl Into<String>, description: impl Into<String>, expected_unit: Unit) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            expected_unit,
        }
    }
}

/// Set of canonical columns, keyed by name, in registration order.
///
/// A registry is filled once and only read afterwards. Source mappings and
/// the unification engine borrow it; [`ColumnRegistry::standard`] provides the
/// shared exoplanet vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnRegistry {
    columns: IndexMap<String, CanonicalColumn>,
}

impl ColumnRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canonical column.
    ///
    /// Fails with [`ExoError::DuplicateName`] if the name is already taken,
    /// whatever the payload.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        expected_unit: Unit,
    ) -> Result<&CanonicalColumn> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(ExoError::DuplicateName(name));
        }
        let column = CanonicalColumn::new(name.clone(), description, expected_unit);
        let (index, _) = self.columns.insert_full(name, column);
        Ok(&self.columns[index])
    }

    /// Look up a canonical column by name.
    pub fn lookup(&self, name: &str) -> Result<&CanonicalColumn> {
        self.columns
            .get(name)
            .ok_or_else(|| ExoError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over columns in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalColumn> {
        self.columns.values()
    }

    /// Get all column names.
    pub fn names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ColumnRegistry::new();
        registry
            .register("pl_per", "Planetary orbital period", Unit::named("d"))
            .unwrap();

        let column = registry.lookup("pl_per").unwrap();
        assert_eq!(column.description, "Planetary orbital period");
        assert_eq!(column.expected_unit, Unit::named("d"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_rejected_regardless_of_payload() {
        let mut registry = ColumnRegistry::new();
        registry.register("pl_name", "Planet name", Unit::NoUnit).unwrap();

        let err = registry
            .register("pl_name", "Something else", Unit::Unitless)
            .unwrap_err();
        assert!(matches!(err, ExoError::DuplicateName(ref n) if n == "pl_name"));
        // First registration is untouched
        assert_eq!(registry.lookup("pl_name").unwrap().description, "Planet name");
    }

    #[test]
    fn test_lookup_missing() {
        let registry = ColumnRegistry::new();
        assert!(matches!(registry.lookup("pl_radj"), Err(ExoError::NotFound(_))));
    }

    #[test]
    fn test_iteration_order() {
        let mut registry = ColumnRegistry::new();
        registry.register("b", "", Unit::Unitless).unwrap();
        registry.register("a", "", Unit::Unitless).unwrap();
        assert_eq!(registry.names(), vec!["b", "a"]);
    }
}
