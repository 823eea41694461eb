use serde_json::Value;
use thiserror::Error;

use crate::core::types::PathologyId;

/// Raised when a criterion's expected value is neither a string nor an
/// array of strings. Detected at catalog load, never at match time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected a string or an array of strings, found {found}")]
pub struct MalformedCriterion {
    /// JSON type name of the offending value
    pub found: &'static str,
}

/// Expected value for a single symptom attribute.
///
/// The catalog source encodes a criterion either as a bare string (exact
/// match) or as an array of acceptable strings (membership). The scalar/list
/// distinction is resolved here, once, at load time; `matches` is a plain
/// comparison with no type sniffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Satisfied only by this exact value (case-sensitive, no trimming)
    Exact(String),
    /// Satisfied by any of these values
    OneOf(Vec<String>),
}

impl Criterion {
    /// Resolve a raw catalog value into a typed criterion
    pub fn from_value(value: &Value) -> Result<Self, MalformedCriterion> {
        match value {
            Value::String(s) => Ok(Self::Exact(s.clone())),
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => values.push(s.clone()),
                        other => {
                            return Err(MalformedCriterion {
                                found: json_type_name(other),
                            })
                        }
                    }
                }
                Ok(Self::OneOf(values))
            }
            other => Err(MalformedCriterion {
                found: json_type_name(other),
            }),
        }
    }

    /// Does the user-supplied value satisfy this criterion?
    ///
    /// An absent answer (`None`) never matches anything.
    #[must_use]
    pub fn matches(&self, actual: Option<&str>) -> bool {
        let Some(actual) = actual else {
            return false;
        };
        match self {
            Self::Exact(expected) => actual == expected,
            Self::OneOf(accepted) => accepted.iter().any(|v| v == actual),
        }
    }

    /// Re-encode as the raw catalog representation
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Exact(v) => Value::String(v.clone()),
            Self::OneOf(vs) => Value::Array(vs.iter().cloned().map(Value::String).collect()),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A pathology definition from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct PathologyDefinition {
    /// Unique identifier
    pub id: PathologyId,

    /// Human-readable display name
    pub name: String,

    /// Free-text description shown with a diagnosis
    pub description: String,

    /// Anatomical zone label, when the catalog provides one
    pub zone: Option<String>,

    /// Expected attribute values, in catalog source order.
    /// May be empty; such entries always score 0% and can never win.
    pub criteria: Vec<(String, Criterion)>,
}

impl PathologyDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: PathologyId::new(id),
            name: name.into(),
            description: description.into(),
            zone: None,
            criteria: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    #[must_use]
    pub fn with_criteria(mut self, criteria: Vec<(String, Criterion)>) -> Self {
        self.criteria = criteria;
        self
    }

    #[must_use]
    pub fn with_criterion(mut self, attribute: impl Into<String>, criterion: Criterion) -> Self {
        self.criteria.push((attribute.into(), criterion));
        self
    }
}
