use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Sentinel the backend uses when it could not collect a field.
pub const UNKNOWN: &str = "Unknown";

/// A single instance-info value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Ordered entries, e.g. `network_interfaces`.
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s == UNKNOWN)
    }
}

/// Snapshot of host telemetry as returned by `/api/instance-info`.
///
/// `null` values are dropped on ingest. The `"Unknown"` sentinel is kept so
/// that the overview cards can still show it, but [`InstanceInfo::displayable`]
/// hides it from the detailed panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct InstanceInfo {
    fields: BTreeMap<String, FieldValue>,
}

impl From<Value> for InstanceInfo {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl InstanceInfo {
    pub fn from_value(value: &Value) -> Self {
        let mut fields = BTreeMap::new();
        if let Some(obj) = value.as_object() {
            for (k, v) in obj {
                let fv = match v {
                    Value::Null => continue,
                    Value::Array(items) => FieldValue::List(items.iter().map(scalar_to_string).collect()),
                    other => FieldValue::Text(scalar_to_string(other)),
                };
                fields.insert(k.clone(), fv);
            }
        }
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Raw text of a field, treating an empty string as missing.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(FieldValue::as_text)
            .filter(|s| !s.is_empty())
    }

    /// A field worth showing in the detailed panel: present and not `"Unknown"`.
    pub fn displayable(&self, field: &str) -> Option<&FieldValue> {
        self.get(field).filter(|v| !v.is_unknown())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

fn scalar_to_string(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(v).unwrap_or_default(),
    }
}
