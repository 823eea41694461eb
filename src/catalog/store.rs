use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::pathology::{Criterion, PathologyDefinition};
use crate::core::types::PathologyId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog root must be a JSON object keyed by pathology id")]
    NotAnObject,
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Raw catalog entry as it appears in the source JSON.
///
/// Field names follow the source data (French intake vocabulary); the typed
/// model uses English names.
#[derive(Debug, Deserialize)]
struct RawPathology {
    #[serde(rename = "nom")]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    zone: Option<String>,
    #[serde(rename = "criteres", default)]
    criteria: Map<String, Value>,
}

/// Export envelope written by `catalog export`; loading accepts both this
/// wrapped form and the bare id-keyed map.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    version: String,
    #[allow(dead_code)]
    created_at: Option<String>,
    pathologies: Map<String, Value>,
}

/// The pathology catalog: loaded once at startup, read-only afterwards.
///
/// Enumeration order is source order, which is what the matching engine's
/// first-seen tie-break keys on.
#[derive(Debug, Default)]
pub struct PathologyCatalog {
    /// All pathologies, in source order
    pathologies: Vec<PathologyDefinition>,

    /// Index: pathology ID -> index in pathologies vec
    id_to_index: HashMap<PathologyId, usize>,
}

impl PathologyCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/pathologies.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a catalog, degrading to an empty one if the source is missing or
    /// malformed. A process with an empty catalog keeps serving requests;
    /// every diagnosis just reports no match.
    #[must_use]
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let loaded = match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load_embedded(),
        };
        match loaded {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!("catalog unavailable ({err}); continuing with an empty catalog");
                Self::new()
            }
        }
    }

    /// Parse a catalog from a JSON string.
    ///
    /// Entries with malformed criteria (a value that is neither a string nor
    /// an array of strings) are skipped with a warning; the rest of the
    /// catalog still loads. Only unreadable or syntactically invalid sources
    /// fail the whole load.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(root) = root else {
            return Err(CatalogError::NotAnObject);
        };

        // Wrapped export envelope or bare id-keyed map
        let entries = if root.contains_key("pathologies") {
            let envelope: CatalogEnvelope = serde_json::from_value(Value::Object(root))?;
            if envelope.version != CATALOG_VERSION {
                tracing::warn!(
                    "catalog version mismatch (expected {CATALOG_VERSION}, found {})",
                    envelope.version
                );
            }
            envelope.pathologies
        } else {
            root
        };

        let mut catalog = Self::new();
        for (id, entry) in entries {
            match parse_entry(&id, entry) {
                Ok(definition) => catalog.add_pathology(definition),
                Err(err) => {
                    tracing::warn!("skipping pathology `{id}`: {err}");
                }
            }
        }
        Ok(catalog)
    }

    /// Add a pathology, preserving insertion order. Duplicate ids keep the
    /// first-seen definition.
    pub fn add_pathology(&mut self, definition: PathologyDefinition) {
        if self.id_to_index.contains_key(&definition.id) {
            tracing::warn!("duplicate pathology id `{}` ignored", definition.id);
            return;
        }
        self.id_to_index
            .insert(definition.id.clone(), self.pathologies.len());
        self.pathologies.push(definition);
    }

    /// Iterate over all pathologies in enumeration (source) order
    pub fn entries(&self) -> impl Iterator<Item = &PathologyDefinition> {
        self.pathologies.iter()
    }

    /// Get a pathology by ID
    #[must_use]
    pub fn get(&self, id: &PathologyId) -> Option<&PathologyDefinition> {
        self.id_to_index.get(id).map(|&idx| &self.pathologies[idx])
    }

    /// Number of pathologies in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.pathologies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pathologies.is_empty()
    }

    /// The catalog as the raw id-keyed wire representation
    #[must_use]
    pub fn to_wire_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for definition in &self.pathologies {
            map.insert(definition.id.0.clone(), entry_to_value(definition));
        }
        map
    }

    /// Export the catalog as pretty JSON in the wrapped envelope form
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let envelope = serde_json::json!({
            "version": CATALOG_VERSION,
            "created_at": chrono::Utc::now().to_rfc3339(),
            "pathologies": Value::Object(self.to_wire_map()),
        });
        Ok(serde_json::to_string_pretty(&envelope)?)
    }
}

fn parse_entry(id: &str, entry: Value) -> anyhow::Result<PathologyDefinition> {
    let raw: RawPathology = serde_json::from_value(entry)?;

    let mut criteria = Vec::with_capacity(raw.criteria.len());
    for (attribute, value) in &raw.criteria {
        let criterion = Criterion::from_value(value)
            .map_err(|err| anyhow::anyhow!("criterion `{attribute}`: {err}"))?;
        criteria.push((attribute.clone(), criterion));
    }

    Ok(PathologyDefinition {
        id: PathologyId::new(id),
        name: raw.name,
        description: raw.description,
        zone: raw.zone,
        criteria,
    })
}

fn entry_to_value(definition: &PathologyDefinition) -> Value {
    let mut criteria = Map::new();
    for (attribute, criterion) in &definition.criteria {
        criteria.insert(attribute.clone(), criterion.to_value());
    }

    let mut entry = Map::new();
    entry.insert("nom".to_string(), Value::String(definition.name.clone()));
    entry.insert(
        "description".to_string(),
        Value::String(definition.description.clone()),
    );
    if let Some(zone) = &definition.zone {
        entry.insert("zone".to_string(), Value::String(zone.clone()));
    }
    entry.insert("criteres".to_string(), Value::Object(criteria));
    Value::Object(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "lumbago": {
            "nom": "Lumbago aigu",
            "description": "Blocage lombaire brutal",
            "zone": "Rachis lombaire",
            "criteres": {
                "siege": "Lombaire",
                "type_douleur": "mecanique",
                "calmee_par": ["repos", "chaleur"]
            }
        },
        "sciatique": {
            "nom": "Sciatique",
            "description": "Douleur radiculaire L5/S1",
            "criteres": {
                "siege": "Lombaire",
                "irradiations": "Membre inferieur"
            }
        }
    }"#;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = PathologyCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_from_json_preserves_source_order() {
        let catalog = PathologyCatalog::from_json(SAMPLE).unwrap();
        let ids: Vec<&str> = catalog.entries().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["lumbago", "sciatique"]);
    }

    #[test]
    fn test_criteria_resolved_at_load() {
        let catalog = PathologyCatalog::from_json(SAMPLE).unwrap();
        let lumbago = catalog.get(&PathologyId::new("lumbago")).unwrap();
        assert_eq!(lumbago.criteria.len(), 3);

        let (attribute, criterion) = &lumbago.criteria[2];
        assert_eq!(attribute, "calmee_par");
        assert_eq!(
            criterion,
            &Criterion::OneOf(vec!["repos".to_string(), "chaleur".to_string()])
        );
    }

    #[test]
    fn test_get_nonexistent() {
        let catalog = PathologyCatalog::from_json(SAMPLE).unwrap();
        assert!(catalog.get(&PathologyId::new("absente")).is_none());
    }

    #[test]
    fn test_malformed_criterion_skips_entry_only() {
        let json = r#"{
            "bad": {"nom": "Bad", "criteres": {"siege": 42}},
            "good": {"nom": "Good", "criteres": {"siege": "Cervical"}}
        }"#;
        let catalog = PathologyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(&PathologyId::new("good")).is_some());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        assert!(matches!(
            PathologyCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            PathologyCatalog::from_json("[1, 2]"),
            Err(CatalogError::NotAnObject)
        ));
    }

    #[test]
    fn test_load_or_empty_degrades_on_missing_file() {
        let catalog = PathologyCatalog::load_or_empty(Some(Path::new("/nonexistent/path.json")));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_export_round_trip() {
        let catalog = PathologyCatalog::from_json(SAMPLE).unwrap();
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"version\""));

        let reloaded = PathologyCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        let ids: Vec<&str> = reloaded.entries().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["lumbago", "sciatique"]);
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut catalog = PathologyCatalog::new();
        catalog.add_pathology(PathologyDefinition::new("p1", "First", ""));
        catalog.add_pathology(PathologyDefinition::new("p1", "Second", ""));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&PathologyId::new("p1")).unwrap().name, "First");
    }
}
