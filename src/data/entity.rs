//! Entity snapshots and the registry they live in
//!
//! A snapshot is a point-in-time read of one addressable thing: a primary
//! `state` plus named `attributes`. The registry maps entity ids
//! (`sensor.washer_progress`) to snapshots.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::number::{coerce_number, number_to_string};

/// Attribute carrying the human readable name of an entity
pub const FRIENDLY_NAME_ATTR: &str = "friendly_name";

/// A loosely-typed value read from a state or attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Lists, maps and explicit nulls
    Structured(serde_json::Value),
}

impl Scalar {
    /// Convert a JSON value, treating `null` as missing
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => Some(Scalar::Number(n.as_f64().unwrap_or(f64::NAN))),
            serde_json::Value::String(s) => Some(Scalar::Text(s.clone())),
            other => Some(Scalar::Structured(other.clone())),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Structured(serde_json::Value::Null))
    }

    /// Numeric reading of the value (`NaN` when it has none)
    pub fn to_number(&self) -> f64 {
        match self {
            Scalar::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Scalar::Number(n) => *n,
            Scalar::Text(s) => coerce_number(s),
            Scalar::Structured(serde_json::Value::Null) => 0.0,
            Scalar::Structured(_) => f64::NAN,
        }
    }

    /// Host truthiness: `false`, `0`, `NaN`, `""` and null are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Structured(v) => !v.is_null(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => f.write_str(&number_to_string(*n)),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Structured(serde_json::Value::Null) => Ok(()),
            Scalar::Structured(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Point-in-time read of one entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Scalar>,
    #[serde(default)]
    pub attributes: HashMap<String, Scalar>,
}

impl EntitySnapshot {
    pub fn new(state: impl Into<Scalar>) -> Self {
        Self {
            entity_id: None,
            state: Some(state.into()),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<Scalar>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Primary state, `None` when missing or null
    pub fn state(&self) -> Option<&Scalar> {
        self.state.as_ref().filter(|s| !s.is_null())
    }

    /// Named attribute; an explicit null is kept and reads as `0`
    pub fn attribute(&self, key: &str) -> Option<&Scalar> {
        self.attributes.get(key)
    }

    pub fn friendly_name(&self) -> Option<&Scalar> {
        self.attribute(FRIENDLY_NAME_ATTR)
    }
}

/// All known snapshots keyed by entity id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entities: HashMap<String, EntitySnapshot>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: &str, snapshot: EntitySnapshot) {
        self.entities.insert(entity_id.to_string(), snapshot);
    }

    pub fn with_entity(mut self, entity_id: &str, snapshot: EntitySnapshot) -> Self {
        self.insert(entity_id, snapshot);
        self
    }

    pub fn get(&self, entity_id: &str) -> Option<&EntitySnapshot> {
        self.entities.get(entity_id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<(String, EntitySnapshot)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, EntitySnapshot)>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(Scalar::from("42").to_number(), 42.0);
        assert_eq!(Scalar::from(true).to_number(), 1.0);
        assert!(Scalar::from("on").to_number().is_nan());
        assert!(Scalar::Structured(serde_json::json!([1, 2])).to_number().is_nan());
    }

    #[test]
    fn test_scalar_truthiness() {
        assert!(Scalar::from("00:10:00").is_truthy());
        assert!(!Scalar::from("").is_truthy());
        assert!(!Scalar::from(0.0).is_truthy());
        assert!(!Scalar::from(f64::NAN).is_truthy());
        assert!(!Scalar::from(false).is_truthy());
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from(73.0).to_string(), "73");
        assert_eq!(Scalar::from("idle").to_string(), "idle");
        assert_eq!(Scalar::Structured(serde_json::Value::Null).to_string(), "");
    }

    #[test]
    fn test_snapshot_deserializes_loose_values() {
        let snapshot: EntitySnapshot = serde_json::from_str(
            r#"{"state": "42", "attributes": {"friendly_name": "Washer", "remaining": "00:10:00", "pct": 12.5, "gone": null}}"#,
        )
        .unwrap();

        assert_eq!(snapshot.state(), Some(&Scalar::from("42")));
        assert_eq!(snapshot.friendly_name(), Some(&Scalar::from("Washer")));
        assert_eq!(snapshot.attribute("pct"), Some(&Scalar::Number(12.5)));
        assert_eq!(
            snapshot.attribute("gone"),
            Some(&Scalar::Structured(serde_json::Value::Null))
        );
        assert_eq!(snapshot.attribute("missing"), None);
    }

    #[test]
    fn test_registry_from_toml() {
        let registry: Registry = toml::from_str(
            r#"
            ["sensor.washer"]
            state = "50"

            ["sensor.dryer"]
            state = 20
            "#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("sensor.dryer").and_then(|e| e.state()),
            Some(&Scalar::Number(20.0))
        );
    }
}
