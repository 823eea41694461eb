use crate::core::vector::SymptomVector;
use crate::parsing::VectorParseError;

/// Parse `attribute=value` lines into a symptom vector.
///
/// Blank lines and `#` comments are skipped. Whitespace around the attribute
/// and value is trimmed; the value itself is otherwise taken verbatim, so
/// matching stays case-sensitive.
pub fn parse_vector_kv(text: &str) -> Result<SymptomVector, VectorParseError> {
    let mut vector = SymptomVector::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((attribute, value)) = line.split_once('=') else {
            return Err(VectorParseError::BadLine { line: index + 1 });
        };
        vector.insert(attribute.trim(), value.trim());
    }

    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let vector = parse_vector_kv("siege=Lombaire\ntype_douleur = mecanique\n").unwrap();
        assert_eq!(vector.get("siege"), Some("Lombaire"));
        assert_eq!(vector.get("type_douleur"), Some("mecanique"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let vector = parse_vector_kv("# intake\n\nsiege=Cervical\n").unwrap();
        assert_eq!(vector.len(), 1);
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = parse_vector_kv("siege=Lombaire\nnot a pair\n").unwrap_err();
        assert!(matches!(err, VectorParseError::BadLine { line: 2 }));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let vector = parse_vector_kv("signes_associes=raideur=matinale\n").unwrap();
        assert_eq!(vector.get("signes_associes"), Some("raideur=matinale"));
    }
}
