//! Metric-definition dictionary
//!
//! Definitions are keyed `scope__code`. A scope is usually a device type;
//! the `GLOBAL` scope holds definitions shared by every device type.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Scope whose definitions apply to every device type
pub const GLOBAL_SCOPE: &str = "GLOBAL";

const KEY_SEPARATOR: &str = "__";

/// Dictionary key for `code` within `scope`
pub fn metric_key(scope: &str, code: &str) -> String {
    format!("{scope}{KEY_SEPARATOR}{code}")
}

/// Split a `scope__code` key
pub fn split_key(key: &str) -> Option<(&str, &str)> {
    key.split_once(KEY_SEPARATOR)
}

/// Describes one telemetry metric
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
    /// Plausible value range for editors and charts
    #[serde(default)]
    pub range: Option<(f64, f64)>,
}

impl MetricDefinition {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            unit: None,
            range: None,
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct MetricDictionary {
    entries: FxHashMap<String, MetricDefinition>,
}

impl MetricDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object of `scope__code` keys
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: FxHashMap<String, MetricDefinition> = serde_json::from_str(json)?;
        Ok(Self { entries: raw })
    }

    /// Add or replace the definition for its code within `scope`
    pub fn insert(&mut self, scope: &str, definition: MetricDefinition) -> Option<MetricDefinition> {
        self.entries.insert(metric_key(scope, &definition.code), definition)
    }

    /// The scoped definition, falling back to the global one
    pub fn lookup(&self, scope: &str, code: &str) -> Option<&MetricDefinition> {
        self.entries
            .get(&metric_key(scope, code))
            .or_else(|| self.entries.get(&metric_key(GLOBAL_SCOPE, code)))
    }

    /// Every metric visible in `scope`, ordered by code; scoped entries
    /// shadow global ones
    pub fn codes_for(&self, scope: &str) -> Vec<&MetricDefinition> {
        let mut merged: BTreeMap<&str, &MetricDefinition> = BTreeMap::new();
        for (key, definition) in &self.entries {
            if let Some((entry_scope, code)) = split_key(key) {
                if entry_scope == GLOBAL_SCOPE {
                    merged.entry(code).or_insert(definition);
                } else if entry_scope == scope {
                    merged.insert(code, definition);
                }
            }
        }
        merged.into_values().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
