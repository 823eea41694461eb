use std::collections::HashMap;

/// Attribute names recognized by the intake questionnaire.
///
/// These are stable across the catalog and the input form. Attributes outside
/// this list are accepted in a vector but can only match if a catalog entry
/// happens to name them.
pub const RECOGNIZED_ATTRIBUTES: &[&str] = &[
    "localisation_anatomique",
    "siege",
    "irradiations",
    "type_douleur",
    "intensite",
    "calmee_par",
    "augmentee_par",
    "evolution",
    "signes_associes",
];

/// A user's answers to the intake questionnaire, keyed by attribute name.
///
/// Request-scoped and ephemeral: one vector per diagnosis call. Unanswered
/// attributes are simply absent and never satisfy a criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomVector {
    values: HashMap<String, String>,
}

impl SymptomVector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from (attribute, value) pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.values.insert(attribute.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// The answer for an attribute, or `None` if unanswered
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the answered (attribute, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Count of answers that use a recognized attribute name
    #[must_use]
    pub fn recognized_count(&self) -> usize {
        self.values
            .keys()
            .filter(|k| RECOGNIZED_ATTRIBUTES.contains(&k.as_str()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_attribute() {
        let vector = SymptomVector::new().with("siege", "Lombaire");
        assert_eq!(vector.get("siege"), Some("Lombaire"));
        assert_eq!(vector.get("evolution"), None);
    }

    #[test]
    fn test_from_pairs() {
        let vector = SymptomVector::from_pairs([("siege", "Lombaire"), ("intensite", "7")]);
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.get("intensite"), Some("7"));
    }

    #[test]
    fn test_recognized_count_ignores_unknown_keys() {
        let vector = SymptomVector::from_pairs([("siege", "Lombaire"), ("couleur", "bleu")]);
        assert_eq!(vector.recognized_count(), 1);
    }
}
