//! Parsers for symptom-vector input.
//!
//! Two input formats are accepted:
//!
//! - A JSON object mapping attribute names to string answers
//!   (`{"siege": "Lombaire", "type_douleur": "mecanique"}`); `null` values
//!   mean "unanswered" and are dropped.
//! - `attribute=value` lines, one answer per line, with `#` comments -
//!   convenient for piping into the CLI.
//!
//! Format is sniffed from the first non-whitespace character: `{` means JSON,
//! anything else is treated as key=value lines.

pub mod json;
pub mod kv;

use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::core::vector::SymptomVector;

#[derive(Error, Debug)]
pub enum VectorParseError {
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input must be a JSON object mapping attribute names to strings")]
    NotAnObject,

    #[error("attribute `{attribute}` must be a string or null")]
    NonStringValue { attribute: String },

    #[error("line {line}: expected `attribute=value`")]
    BadLine { line: usize },
}

/// Parse a symptom vector from text, sniffing the format
pub fn parse_vector(text: &str) -> Result<SymptomVector, VectorParseError> {
    match text.trim_start().chars().next() {
        Some('{') => json::parse_vector_json(text),
        _ => kv::parse_vector_kv(text),
    }
}

/// Load a symptom vector from a file, or stdin when the path is `-`
pub fn load_vector(path: &Path) -> Result<SymptomVector, VectorParseError> {
    let text = if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    parse_vector(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniffs_json() {
        let vector = parse_vector(r#"  {"siege": "Lombaire"}"#).unwrap();
        assert_eq!(vector.get("siege"), Some("Lombaire"));
    }

    #[test]
    fn test_sniffs_kv() {
        let vector = parse_vector("siege=Lombaire\n").unwrap();
        assert_eq!(vector.get("siege"), Some("Lombaire"));
    }
}
