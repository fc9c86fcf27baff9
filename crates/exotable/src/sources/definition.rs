//! Source definitions and the catalog resolving them.

use indexmap::IndexMap;
use tracing::info;

use crate::config::CatalogConfig;
use crate::error::{ExoError, Result};
use crate::exotable::ExoTable;
use crate::input::{DelimitedFile, ParserConfig};
use crate::mapping::SourceMapping;
use crate::registry::ColumnRegistry;
use crate::transform::MergeSpec;

/// How to read the file of a source.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Path of the file, relative to the data directory unless absolute.
    pub default_path: String,
    /// Names replacing the file's header row.
    pub header_override: Option<Vec<String>>,
    /// Comment line marker.
    pub comment: Option<u8>,
    /// Trim whitespace around fields.
    pub trim: bool,
    /// Field delimiter (None = auto-detect).
    pub delimiter: Option<u8>,
}

impl LoadOptions {
    pub fn new(default_path: impl Into<String>) -> Self {
        Self {
            default_path: default_path.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, names: &[&str]) -> Self {
        self.header_override = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn with_comment(mut self, comment: u8) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Parser settings for this source.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            delimiter: self.delimiter,
            header_override: self.header_override.clone(),
            comment: self.comment,
            trim: self.trim,
            ..ParserConfig::default()
        }
    }
}

/// Everything needed to load one data source.
#[derive(Debug, Clone)]
pub struct SourceDefinition {
    pub mapping: SourceMapping,
    pub load: LoadOptions,
}

impl SourceDefinition {
    pub fn new(mapping: SourceMapping, load: LoadOptions) -> Self {
        Self { mapping, load }
    }

    /// Source identifier.
    pub fn name(&self) -> &str {
        self.mapping.name()
    }
}

/// Known data sources and where their files live.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    sources: IndexMap<String, SourceDefinition>,
}

impl Catalog {
    /// Create a catalog without sources.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            sources: IndexMap::new(),
        }
    }

    /// Catalog of every built-in source, mapped against the standard registry.
    pub fn standard(config: CatalogConfig) -> Result<Self> {
        Self::with_registry(config, ColumnRegistry::standard())
    }

    /// Catalog of every built-in source, mapped against `registry`.
    pub fn with_registry(config: CatalogConfig, registry: &ColumnRegistry) -> Result<Self> {
        let mut catalog = Self::new(config);
        for definition in super::builtin_sources(registry)? {
            catalog.add(definition);
        }
        Ok(catalog)
    }

    /// Add or replace a source definition.
    pub fn add(&mut self, definition: SourceDefinition) {
        self.sources.insert(definition.name().to_string(), definition);
    }

    /// Source names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.sources.keys().map(|k| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceDefinition> {
        self.sources.values()
    }

    /// Get a source definition by name.
    pub fn get(&self, name: &str) -> Result<&SourceDefinition> {
        self.sources
            .get(name)
            .ok_or_else(|| ExoError::UnknownSource(name.to_string()))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// File loader for a source, with its path resolved against the config.
    pub fn loader(&self, name: &str) -> Result<DelimitedFile> {
        let definition = self.get(name)?;
        let path = self.config.resolve_path(name, &definition.load.default_path);
        Ok(DelimitedFile::new(path, definition.load.parser_config()))
    }

    /// Read and unify a source into a new table.
    pub fn load(&self, name: &str, apply_renaming: bool) -> Result<ExoTable> {
        let definition = self.get(name)?;
        let loader = self.loader(name)?;
        info!(source = name, path = %loader.path().display(), "Reading source");
        ExoTable::from_source(&loader, &definition.mapping, apply_renaming)
    }

    /// Read a source and merge it into `table`.
    ///
    /// The already-included check runs before the file is read.
    pub fn merge_into(
        &self,
        table: &ExoTable,
        name: &str,
        apply_renaming: bool,
        spec: &MergeSpec,
    ) -> Result<ExoTable> {
        if table.includes_source(name) {
            return Err(ExoError::AlreadyMerged(name.to_string()));
        }
        let other = self.load(name, apply_renaming)?;
        table.merge(&other, spec)
    }
}
