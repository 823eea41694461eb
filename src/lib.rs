//! # patho-solver
//!
//! A library for matching symptom questionnaires against a catalog of
//! musculoskeletal pathologies, built as a teaching aid for osteopathy
//! students.
//!
//! Students fill in a structured intake questionnaire (site, irradiation,
//! pain type, intensity, relieving and aggravating factors, evolution,
//! associated signs). `patho-solver` scores those answers against every
//! pathology definition in a catalog and reports the best match with a
//! confidence percentage, or an explicit "no diagnosis" when nothing matches
//! closely enough.
//!
//! ## Features
//!
//! - **Load-time criteria resolution**: catalog values become typed
//!   `Exact`/`OneOf` criteria once, at load - no type sniffing per request
//! - **Deterministic selection**: first-seen wins ties in catalog order
//! - **Confidence gate**: strict >50% by default, configurable
//! - **Degraded mode**: a missing catalog yields an empty one, never a crash
//!
//! ## Example
//!
//! ```rust,no_run
//! use patho_solver::{MatchingEngine, PathologyCatalog, SymptomVector};
//!
//! // Load the embedded pathology catalog
//! let catalog = PathologyCatalog::load_embedded().unwrap();
//!
//! // Collect the questionnaire answers
//! let vector = SymptomVector::new()
//!     .with("siege", "Lombaire")
//!     .with("type_douleur", "mecanique");
//!
//! // Find the best-matching pathology
//! let engine = MatchingEngine::new(&catalog);
//! match engine.diagnose(&vector) {
//!     Some(result) => println!("{}: {:.1}%", result.name, result.display_confidence()),
//!     None => println!("no diagnosis"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Pathology catalog storage and loading
//! - [`core`]: Core data types for pathologies, criteria, and symptom vectors
//! - [`matching`]: Matching engine and scoring
//! - [`parsing`]: Symptom-vector input parsers (JSON, key=value lines)
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based diagnosis

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::PathologyCatalog;
pub use core::pathology::{Criterion, PathologyDefinition};
pub use core::types::*;
pub use core::vector::{SymptomVector, RECOGNIZED_ATTRIBUTES};
pub use matching::engine::{MatchResult, MatchingConfig, MatchingEngine, ThresholdPolicy};
