//! Pathology matching engine and scoring.
//!
//! This module provides the core decision logic:
//!
//! - [`MatchingEngine`]: Scores a symptom vector against every catalog entry
//! - [`MatchResult`]: The winning pathology with its match percentage
//! - [`MatchingConfig`] / [`ThresholdPolicy`]: The acceptance gate
//!
//! ## Algorithm
//!
//! For each pathology, the match percentage is the fraction of its criteria
//! satisfied by the vector, times 100. A criterion is satisfied when the
//! user's value equals the expected string, or is a member of the expected
//! list. A pathology with no criteria scores 0 and can never win.
//!
//! Selection scans the catalog in enumeration order and replaces the running
//! best only on a strictly greater percentage, so ties keep the first-seen
//! entry. The best candidate is returned only if it clears the
//! minimum-confidence gate (default: strictly greater than 50%); otherwise
//! the outcome is "no diagnosis", which is an absence, not an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use patho_solver::{MatchingEngine, PathologyCatalog, SymptomVector};
//!
//! let catalog = PathologyCatalog::load_embedded().unwrap();
//! let vector = SymptomVector::new()
//!     .with("siege", "Lombaire")
//!     .with("type_douleur", "mecanique");
//!
//! let engine = MatchingEngine::new(&catalog);
//! match engine.diagnose(&vector) {
//!     Some(result) => println!("{}: {:.1}%", result.name, result.display_confidence()),
//!     None => println!("no diagnosis"),
//! }
//! ```

pub mod engine;
pub mod scoring;

pub use engine::{
    MatchResult, MatchingConfig, MatchingEngine, ScoredPathology, ThresholdPolicy,
    DEFAULT_MIN_CONFIDENCE,
};
pub use scoring::{match_percentage, round_for_display};
