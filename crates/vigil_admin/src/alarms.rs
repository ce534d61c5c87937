//! Alarm-rule store

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Comparison applied to a reading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
}

impl Operator {
    /// Does `reading` trip a rule with this operator and `threshold`?
    pub fn evaluate(self, reading: f64, threshold: f64) -> bool {
        match self {
            Operator::Gt => reading > threshold,
            Operator::Gte => reading >= threshold,
            Operator::Lt => reading < threshold,
            Operator::Lte => reading <= threshold,
            Operator::Eq => (reading - threshold).abs() <= f64::EPSILON,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Eq => "==",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    #[default]
    Warning,
    Critical,
}

/// Fields of a rule before it is stored
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAlarmRule {
    pub name: String,
    pub device_type: String,
    pub metric_key: String,
    pub operator: Operator,
    pub threshold: f64,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// A stored alarm rule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlarmRule {
    pub id: u64,
    pub name: String,
    pub device_type: String,
    pub metric_key: String,
    pub operator: Operator,
    pub threshold: f64,
    pub severity: Severity,
    pub enabled: bool,
}

impl AlarmRule {
    /// An enabled rule whose condition holds for `reading`
    pub fn is_triggered(&self, reading: f64) -> bool {
        self.enabled && self.operator.evaluate(reading, self.threshold)
    }

    /// e.g. `temperature > 80`
    pub fn condition(&self) -> String {
        format!("{} {} {}", self.metric_key, self.operator.symbol(), self.threshold)
    }
}

/// In-memory alarm rules keyed by id, in creation order
#[derive(Clone, Debug, Default)]
pub struct AlarmRuleStore {
    rules: IndexMap<u64, AlarmRule>,
    next_id: u64,
}

impl AlarmRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a rule and return its assigned id
    pub fn create(&mut self, rule: NewAlarmRule) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!(id, name = %rule.name, "alarm rule created");
        self.rules.insert(
            id,
            AlarmRule {
                id,
                name: rule.name,
                device_type: rule.device_type,
                metric_key: rule.metric_key,
                operator: rule.operator,
                threshold: rule.threshold,
                severity: rule.severity,
                enabled: rule.enabled,
            },
        );
        id
    }

    pub fn get(&self, id: u64) -> Option<&AlarmRule> {
        self.rules.get(&id)
    }

    /// Overwrite the editable fields of rule `id`
    pub fn update(&mut self, id: u64, rule: NewAlarmRule) -> Result<&AlarmRule> {
        let slot = self.rules.get_mut(&id).ok_or_else(|| not_found(id))?;
        *slot = AlarmRule {
            id,
            name: rule.name,
            device_type: rule.device_type,
            metric_key: rule.metric_key,
            operator: rule.operator,
            threshold: rule.threshold,
            severity: rule.severity,
            enabled: rule.enabled,
        };
        Ok(slot)
    }

    /// Flip the enabled flag, returning the new value
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let rule = self.rules.get_mut(&id).ok_or_else(|| not_found(id))?;
        rule.enabled = !rule.enabled;
        tracing::debug!(id, enabled = rule.enabled, "alarm rule toggled");
        Ok(rule.enabled)
    }

    pub fn remove(&mut self, id: u64) -> Result<AlarmRule> {
        self.rules.shift_remove(&id).ok_or_else(|| not_found(id))
    }

    pub fn list(&self) -> impl Iterator<Item = &AlarmRule> {
        self.rules.values()
    }

    pub fn for_device_type<'a>(&'a self, device_type: &'a str) -> impl Iterator<Item = &'a AlarmRule> {
        self.rules
            .values()
            .filter(move |r| r.device_type == device_type)
    }

    /// Rules for this device type and metric tripped by `reading`, most
    /// severe first
    pub fn triggered(&self, device_type: &str, metric_key: &str, reading: f64) -> Vec<&AlarmRule> {
        let mut hits: Vec<&AlarmRule> = self
            .rules
            .values()
            .filter(|r| {
                r.device_type == device_type && r.metric_key == metric_key && r.is_triggered(reading)
            })
            .collect();
        hits.sort_by(|a, b| b.severity.cmp(&a.severity));
        hits
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn not_found(id: u64) -> RegistryError {
    RegistryError::NotFound(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, operator: Operator, threshold: f64, severity: Severity) -> NewAlarmRule {
        NewAlarmRule {
            name: name.to_string(),
            device_type: "chiller".to_string(),
            metric_key: "temperature".to_string(),
            operator,
            threshold,
            severity,
            enabled: true,
        }
    }

    #[test]
    fn test_operators() {
        assert!(Operator::Gt.evaluate(81.0, 80.0));
        assert!(!Operator::Gt.evaluate(80.0, 80.0));
        assert!(Operator::Gte.evaluate(80.0, 80.0));
        assert!(Operator::Lt.evaluate(1.0, 2.0));
        assert!(Operator::Lte.evaluate(2.0, 2.0));
        assert!(Operator::Eq.evaluate(0.5, 0.5));
        assert!(!Operator::Eq.evaluate(0.5, 0.6));
    }

    #[test]
    fn test_ids_are_sequential_and_never_reused() {
        let mut store = AlarmRuleStore::new();
        let a = store.create(rule("hot", Operator::Gt, 80.0, Severity::Warning));
        let b = store.create(rule("very hot", Operator::Gt, 95.0, Severity::Critical));
        assert_eq!((a, b), (1, 2));

        store.remove(b).unwrap();
        let c = store.create(rule("cold", Operator::Lt, 2.0, Severity::Info));
        assert_eq!(c, 3);
    }

    #[test]
    fn test_toggle_disables_triggering() {
        let mut store = AlarmRuleStore::new();
        let id = store.create(rule("hot", Operator::Gt, 80.0, Severity::Warning));
        assert!(store.get(id).unwrap().is_triggered(90.0));

        assert!(!store.toggle(id).unwrap());
        assert!(!store.get(id).unwrap().is_triggered(90.0));
        assert!(store.toggle(99).is_err());
    }

    #[test]
    fn test_triggered_sorted_by_severity() {
        let mut store = AlarmRuleStore::new();
        store.create(rule("hot", Operator::Gt, 80.0, Severity::Warning));
        store.create(rule("very hot", Operator::Gt, 95.0, Severity::Critical));
        store.create(rule("cold", Operator::Lt, 2.0, Severity::Info));

        let names: Vec<_> = store
            .triggered("chiller", "temperature", 99.0)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["very hot", "hot"]);
        assert!(store.triggered("boiler", "temperature", 99.0).is_empty());
    }

    #[test]
    fn test_update_keeps_id() {
        let mut store = AlarmRuleStore::new();
        let id = store.create(rule("hot", Operator::Gt, 80.0, Severity::Warning));
        let updated = store
            .update(id, rule("hot", Operator::Gte, 85.0, Severity::Critical))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.condition(), "temperature >= 85");
    }
}
