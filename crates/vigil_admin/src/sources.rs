//! Data-source registry
//!
//! Records are kept in registration order, which is the order the source
//! list screen shows them in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Transport a data source speaks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Mqtt,
    Http,
    Modbus,
    Opcua,
    Database,
}

impl SourceType {
    pub const ALL: &'static [SourceType] = &[
        SourceType::Mqtt,
        SourceType::Http,
        SourceType::Modbus,
        SourceType::Opcua,
        SourceType::Database,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SourceType::Mqtt => "mqtt",
            SourceType::Http => "http",
            SourceType::Modbus => "modbus",
            SourceType::Opcua => "opcua",
            SourceType::Database => "database",
        }
    }

    /// Human label for pickers
    pub fn label(self) -> &'static str {
        match self {
            SourceType::Mqtt => "MQTT",
            SourceType::Http => "HTTP",
            SourceType::Modbus => "Modbus",
            SourceType::Opcua => "OPC UA",
            SourceType::Database => "Database",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A configured data source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SourceType,
    /// Transport-specific settings (broker URL, register map, DSN, ...)
    #[serde(default)]
    pub config: serde_json::Value,
}

impl DataSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SourceType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            config: serde_json::Value::Object(Default::default()),
        }
    }

    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = config;
        self
    }
}

/// Insertion-ordered registry of data sources
#[derive(Clone, Debug, Default)]
pub struct DataSourceRegistry {
    sources: IndexMap<String, DataSource>,
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of sources
    pub fn from_json(json: &str) -> Result<Self> {
        let sources: Vec<DataSource> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for source in sources {
            registry.register(source)?;
        }
        Ok(registry)
    }

    /// Serialize every source, in order, as a JSON array
    pub fn to_json(&self) -> Result<String> {
        let sources: Vec<&DataSource> = self.sources.values().collect();
        Ok(serde_json::to_string_pretty(&sources)?)
    }

    pub fn register(&mut self, source: DataSource) -> Result<()> {
        if self.sources.contains_key(&source.id) {
            return Err(RegistryError::DuplicateId(source.id));
        }
        tracing::debug!(id = %source.id, kind = %source.kind, "data source registered");
        self.sources.insert(source.id.clone(), source);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&DataSource> {
        self.sources.get(id)
    }

    /// Replace an existing source, keeping its position
    pub fn update(&mut self, source: DataSource) -> Result<()> {
        match self.sources.get_mut(&source.id) {
            Some(slot) => {
                *slot = source;
                Ok(())
            }
            None => Err(RegistryError::NotFound(source.id)),
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<DataSource> {
        self.sources
            .shift_remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn list(&self) -> impl Iterator<Item = &DataSource> {
        self.sources.values()
    }

    pub fn by_type(&self, kind: SourceType) -> impl Iterator<Item = &DataSource> {
        self.sources.values().filter(move |s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
