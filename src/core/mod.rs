//! Core data types for pathology matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`PathologyDefinition`]: A diagnostic category with its expected symptom attributes
//! - [`Criterion`]: One expected value - exact or one-of-several
//! - [`SymptomVector`]: A user's questionnaire answers, keyed by attribute name
//! - [`PathologyId`], [`Confidence`]: Identifier and result classification types
//!
//! ## Matching Semantics
//!
//! Comparison is exact and case-sensitive: `"Lombaire"` does not match
//! `"lombaire"` and no trimming or normalization is applied. An unanswered
//! attribute never satisfies a criterion.

pub mod pathology;
pub mod types;
pub mod vector;

pub use pathology::{Criterion, MalformedCriterion, PathologyDefinition};
pub use types::{Confidence, PathologyId};
pub use vector::{SymptomVector, RECOGNIZED_ATTRIBUTES};
