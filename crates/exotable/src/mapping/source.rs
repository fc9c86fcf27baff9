//! Source mapping table and its builder.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ExoError, Result};
use crate::registry::ColumnRegistry;
use crate::units::Unit;

/// How one native column of a source relates to the canonical vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Column name as it appears in the source table.
    pub source_column: String,
    /// Canonical column name, empty if the column is not unified.
    pub canonical_name: String,
    /// Description of the column content.
    pub description: String,
    /// Unit of the values as provided by the source.
    pub unit: Unit,
}

impl ColumnMapping {
    /// Returns true if this column maps onto a canonical column.
    pub fn is_unified(&self) -> bool {
        !self.canonical_name.is_empty()
    }
}

/// Non-fatal issue found while building a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MappingWarning {
    /// A description was supplied for a unified column and replaced by the
    /// canonical description.
    DescriptionIgnored {
        source_column: String,
        canonical_name: String,
    },
    /// The source unit differs from the unit the canonical column expects.
    /// Values are not converted.
    UnitMismatch {
        source_column: String,
        canonical_name: String,
        source_unit: Unit,
        expected_unit: Unit,
    },
}

/// Mapping table of a single data source. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMapping {
    name: String,
    rows: Vec<ColumnMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<MappingWarning>,
}

impl SourceMapping {
    /// Start building the mapping of source `name` against `registry`.
    pub fn builder<'r>(name: impl Into<String>, registry: &'r ColumnRegistry) -> SourceMappingBuilder<'r> {
        SourceMappingBuilder {
            registry,
            mapping: SourceMapping {
                name: name.into(),
                rows: Vec::new(),
                warnings: Vec::new(),
            },
        }
    }

    /// Source identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All rows in declaration order.
    pub fn rows(&self) -> &[ColumnMapping] {
        &self.rows
    }

    /// Warnings raised while the mapping was built.
    pub fn warnings(&self) -> &[MappingWarning] {
        &self.warnings
    }

    /// Rows with a canonical name.
    pub fn unified_rows(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.rows.iter().filter(|r| r.is_unified())
    }

    /// Find the row for a native column name.
    pub fn by_source(&self, source_column: &str) -> Option<&ColumnMapping> {
        self.rows.iter().find(|r| r.source_column == source_column)
    }

    /// Find the first row mapped onto a canonical name.
    pub fn by_canonical(&self, canonical_name: &str) -> Option<&ColumnMapping> {
        self.rows
            .iter()
            .find(|r| r.is_unified() && r.canonical_name == canonical_name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builder validating each mapping row against a registry.
#[derive(Debug)]
pub struct SourceMappingBuilder<'r> {
    registry: &'r ColumnRegistry,
    mapping: SourceMapping,
}

impl<'r> SourceMappingBuilder<'r> {
    /// Add a mapping row.
    ///
    /// With a non-empty `canonical_name` the column must exist in the
    /// registry; its description replaces `description`, and a `unit`
    /// different from the expected one is kept but reported. With an empty
    /// `canonical_name` the column is a passthrough and `description` and
    /// `unit` are stored as given.
    pub fn add_mapping(
        &mut self,
        source_column: &str,
        canonical_name: &str,
        description: &str,
        unit: Unit,
    ) -> Result<&mut Self> {
        if self.mapping.by_source(source_column).is_some() {
            debug!(
                source = %self.mapping.name,
                column = source_column,
                "Duplicate mapping row ignored"
            );
            return Ok(self);
        }

        let mut description = description.to_string();

        if !canonical_name.is_empty() {
            let canonical = self.registry.lookup(canonical_name).map_err(|_| {
                ExoError::UnknownCanonicalColumn {
                    source_column: source_column.to_string(),
                    canonical: canonical_name.to_string(),
                }
            })?;

            if !description.is_empty() {
                warn!(
                    source = %self.mapping.name,
                    column = source_column,
                    "Unified column name provided, using the unified column description instead"
                );
                self.mapping.warnings.push(MappingWarning::DescriptionIgnored {
                    source_column: source_column.to_string(),
                    canonical_name: canonical_name.to_string(),
                });
            }
            description = canonical.description.clone();

            if unit != canonical.expected_unit {
                warn!(
                    source = %self.mapping.name,
                    column = source_column,
                    unit = %unit,
                    expected = %canonical.expected_unit,
                    "Unit differs from the unified column unit; values are not converted"
                );
                self.mapping.warnings.push(MappingWarning::UnitMismatch {
                    source_column: source_column.to_string(),
                    canonical_name: canonical_name.to_string(),
                    source_unit: unit.clone(),
                    expected_unit: canonical.expected_unit.clone(),
                });
            }
        }

        self.mapping.rows.push(ColumnMapping {
            source_column: source_column.to_string(),
            canonical_name: canonical_name.to_string(),
            description,
            unit,
        });
        Ok(self)
    }

    /// Map a native column onto a canonical column.
    pub fn unified(&mut self, source_column: &str, canonical_name: &str, unit: &str) -> Result<&mut Self> {
        self.add_mapping(source_column, canonical_name, "", Unit::parse(unit))
    }

    /// Describe a native column that has no canonical counterpart.
    pub fn passthrough(&mut self, source_column: &str, description: &str, unit: &str) -> Result<&mut Self> {
        self.add_mapping(source_column, "", description, Unit::parse(unit))
    }

    /// Freeze the mapping.
    pub fn build(self) -> SourceMapping {
        self.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ColumnRegistry {
        ColumnRegistry::from_definitions([
            ("pl_name", "Planet name", "N/A"),
            ("pl_per", "Planetary orbital period", "d"),
        ])
        .unwrap()
    }

    #[test]
    fn test_unified_mapping_takes_canonical_description() {
        let registry = registry();
        let mut builder = SourceMapping::builder("test", &registry);
        builder.unified("orbital_period", "pl_per", "d").unwrap();
        let mapping = builder.build();

        let row = mapping.by_source("orbital_period").unwrap();
        assert_eq!(row.canonical_name, "pl_per");
        assert_eq!(row.description, "Planetary orbital period");
        assert!(mapping.warnings().is_empty());
    }

    #[test]
    fn test_unknown_canonical_column() {
        let registry = registry();
        let mut builder = SourceMapping::builder("test", &registry);
        let err = builder.unified("radius", "pl_radj", "jupiterRad").unwrap_err();
        assert!(matches!(
            err,
            ExoError::UnknownCanonicalColumn { ref canonical, .. } if canonical == "pl_radj"
        ));
    }

    #[test]
    fn test_description_override_warns() {
        let registry = registry();
        let mut builder = SourceMapping::builder("test", &registry);
        builder
            .add_mapping("name", "pl_name", "The planet", Unit::NoUnit)
            .unwrap();
        let mapping = builder.build();

        assert_eq!(mapping.rows()[0].description, "Planet name");
        assert!(matches!(
            mapping.warnings()[0],
            MappingWarning::DescriptionIgnored { .. }
        ));
    }

    #[test]
    fn test_unit_mismatch_keeps_source_unit() {
        let registry = registry();
        let mut builder = SourceMapping::builder("test", &registry);
        builder.unified("period_hours", "pl_per", "h").unwrap();
        let mapping = builder.build();

        assert_eq!(mapping.rows()[0].unit, Unit::named("h"));
        assert_eq!(
            mapping.warnings(),
            &[MappingWarning::UnitMismatch {
                source_column: "period_hours".to_string(),
                canonical_name: "pl_per".to_string(),
                source_unit: Unit::named("h"),
                expected_unit: Unit::named("d"),
            }]
        );
    }

    #[test]
    fn test_passthrough_kept_as_given() {
        let registry = registry();
        let mut builder = SourceMapping::builder("test", &registry);
        builder.passthrough("Discovery_reference", "Discovery paper", "N/A").unwrap();
        let mapping = builder.build();

        let row = &mapping.rows()[0];
        assert!(!row.is_unified());
        assert_eq!(row.description, "Discovery paper");
        assert_eq!(row.unit, Unit::NoUnit);
        assert_eq!(mapping.unified_rows().count(), 0);
    }

    #[test]
    fn test_duplicate_source_column_keeps_first() {
        let registry = registry();
        let mut builder = SourceMapping::builder("test", &registry);
        builder
            .unified("name", "pl_name", "N/A")
            .unwrap()
            .passthrough("name", "ignored", "")
            .unwrap();
        let mapping = builder.build();

        assert_eq!(mapping.len(), 1);
        assert!(mapping.rows()[0].is_unified());
    }
}
