//! Vigil Admin Collaborators
//!
//! The non-visual services the admin console screens talk to:
//!
//! - [`DataSourceRegistry`]: configured MQTT/HTTP/Modbus/OPC UA/database sources
//! - [`AlarmRuleStore`]: threshold alarm rules per device type
//! - [`MetricDictionary`]: metric definitions with `GLOBAL` fallback
//! - [`ThresholdAdvisor`]: one-shot calls to an external [`SuggestionService`]

pub mod alarms;
pub mod error;
pub mod metrics;
pub mod sources;
pub mod suggest;

pub use alarms::{AlarmRule, AlarmRuleStore, NewAlarmRule, Operator, Severity};
pub use error::{RegistryError, Result, SuggestError};
pub use metrics::{metric_key, MetricDefinition, MetricDictionary, GLOBAL_SCOPE};
pub use sources::{DataSource, DataSourceRegistry, SourceType};
pub use suggest::{SuggestionService, ThresholdAdvisor, ThresholdSuggestion};
