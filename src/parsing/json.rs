use serde_json::Value;

use crate::core::vector::SymptomVector;
use crate::parsing::VectorParseError;

/// Parse a symptom vector from a JSON object.
///
/// Values must be strings; `null` marks an unanswered attribute and is
/// dropped. Any other value type is rejected rather than coerced, so a
/// mistyped questionnaire payload fails loudly instead of silently never
/// matching.
pub fn parse_vector_json(text: &str) -> Result<SymptomVector, VectorParseError> {
    let root: Value = serde_json::from_str(text)?;
    vector_from_value(&root)
}

/// Build a symptom vector from an already-parsed JSON value
pub fn vector_from_value(root: &Value) -> Result<SymptomVector, VectorParseError> {
    let Value::Object(map) = root else {
        return Err(VectorParseError::NotAnObject);
    };

    let mut vector = SymptomVector::new();
    for (attribute, value) in map {
        match value {
            Value::String(s) => vector.insert(attribute.clone(), s.clone()),
            Value::Null => {}
            _ => {
                return Err(VectorParseError::NonStringValue {
                    attribute: attribute.clone(),
                })
            }
        }
    }
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object() {
        let vector =
            parse_vector_json(r#"{"siege": "Lombaire", "type_douleur": "mecanique"}"#).unwrap();
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.get("type_douleur"), Some("mecanique"));
    }

    #[test]
    fn test_null_values_are_unanswered() {
        let vector = parse_vector_json(r#"{"siege": "Lombaire", "evolution": null}"#).unwrap();
        assert_eq!(vector.len(), 1);
        assert_eq!(vector.get("evolution"), None);
    }

    #[test]
    fn test_non_string_value_rejected() {
        let err = parse_vector_json(r#"{"intensite": 7}"#).unwrap_err();
        assert!(matches!(
            err,
            VectorParseError::NonStringValue { attribute } if attribute == "intensite"
        ));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            parse_vector_json("[1, 2]"),
            Err(VectorParseError::NotAnObject)
        ));
    }

    #[test]
    fn test_empty_string_is_an_answer() {
        // An empty answer stays in the vector; it just never matches a
        // non-empty criterion
        let vector = parse_vector_json(r#"{"siege": ""}"#).unwrap();
        assert_eq!(vector.get("siege"), Some(""));
    }
}
