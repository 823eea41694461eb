use crate::catalog::store::PathologyCatalog;
use crate::core::pathology::PathologyDefinition;
use crate::core::types::{Confidence, PathologyId};
use crate::core::vector::SymptomVector;
use crate::matching::scoring::{match_percentage, round_for_display};

/// Default minimum match percentage a candidate must clear
pub const DEFAULT_MIN_CONFIDENCE: f64 = 50.0;

/// How the minimum-confidence gate compares against the best percentage.
///
/// The default is `Exclusive` (strictly greater than): a pathology scoring
/// exactly 50% is not returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// Accept only when percentage > minimum
    #[default]
    Exclusive,
    /// Accept when percentage >= minimum
    Inclusive,
}

impl ThresholdPolicy {
    #[must_use]
    pub fn accepts(self, percentage: f64, minimum: f64) -> bool {
        match self {
            Self::Exclusive => percentage > minimum,
            Self::Inclusive => percentage >= minimum,
        }
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Minimum match percentage (0-100) a candidate must clear
    pub min_confidence: f64,
    /// Comparator used against `min_confidence`
    pub threshold_policy: ThresholdPolicy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            threshold_policy: ThresholdPolicy::default(),
        }
    }
}

/// A successful diagnosis: the winning pathology and its match percentage
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub pathology_id: PathologyId,
    pub name: String,
    pub description: String,
    pub zone: Option<String>,
    /// Unrounded match percentage (0-100)
    pub confidence: f64,
    /// Qualitative confidence level
    pub level: Confidence,
}

impl MatchResult {
    fn new(definition: &PathologyDefinition, confidence: f64) -> Self {
        Self {
            pathology_id: definition.id.clone(),
            name: definition.name.clone(),
            description: definition.description.clone(),
            zone: definition.zone.clone(),
            confidence,
            level: Confidence::from_percentage(confidence),
        }
    }

    /// Confidence rounded to one decimal for display
    #[must_use]
    pub fn display_confidence(&self) -> f64 {
        round_for_display(self.confidence)
    }
}

/// Match percentage of a single catalog entry, as reported by
/// [`MatchingEngine::score_all`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPathology {
    pub pathology_id: PathologyId,
    pub name: String,
    /// Unrounded match percentage (0-100)
    pub percentage: f64,
}

/// The matching engine: scores a symptom vector against every catalog entry
/// and selects the best match.
///
/// `diagnose` is a pure function of (catalog, vector) - no I/O, no shared
/// mutable state - so one engine over an immutable catalog can serve
/// concurrent requests without synchronization.
pub struct MatchingEngine<'a> {
    catalog: &'a PathologyCatalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create an engine with default configuration (strict >50% gate)
    #[must_use]
    pub fn new(catalog: &'a PathologyCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(catalog: &'a PathologyCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Find the best-matching pathology for a symptom vector.
    ///
    /// Scans the catalog in enumeration order, keeping the running best and
    /// replacing it only on a strictly greater percentage - on a tie the
    /// first-seen entry wins. Returns `None` when the catalog is empty or no
    /// candidate clears the minimum-confidence gate; absence is a normal
    /// outcome, not an error.
    #[must_use]
    pub fn diagnose(&self, vector: &SymptomVector) -> Option<MatchResult> {
        let mut best: Option<(&PathologyDefinition, f64)> = None;
        let mut best_percentage = 0.0;

        for definition in self.catalog.entries() {
            let percentage = match_percentage(definition, vector);
            if percentage > best_percentage {
                best_percentage = percentage;
                best = Some((definition, percentage));
            }
        }

        let (definition, percentage) = best?;
        if self
            .config
            .threshold_policy
            .accepts(percentage, self.config.min_confidence)
        {
            Some(MatchResult::new(definition, percentage))
        } else {
            None
        }
    }

    /// Score every catalog entry, in enumeration order, regardless of the
    /// acceptance gate. Used by the `score` command for teaching.
    #[must_use]
    pub fn score_all(&self, vector: &SymptomVector) -> Vec<ScoredPathology> {
        self.catalog
            .entries()
            .map(|definition| ScoredPathology {
                pathology_id: definition.id.clone(),
                name: definition.name.clone(),
                percentage: match_percentage(definition, vector),
            })
            .collect()
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }
}
