//! Pathology catalog storage.
//!
//! The catalog holds the fixed set of pathology definitions the matching
//! engine scores against. An embedded catalog is compiled into the binary,
//! but custom catalogs can also be loaded from JSON files.
//!
//! The catalog is loaded once at process start and never mutated afterwards;
//! refreshing it requires a restart. A missing or malformed source degrades
//! to an empty catalog (every diagnosis then reports no match) rather than
//! failing the process.
//!
//! ## Source Format
//!
//! A JSON object keyed by pathology id:
//!
//! ```json
//! {
//!   "lumbago_aigu": {
//!     "nom": "Lumbago aigu",
//!     "description": "Blocage lombaire brutal",
//!     "zone": "Rachis lombaire",
//!     "criteres": {
//!       "siege": "Lombaire",
//!       "calmee_par": ["repos", "chaleur"]
//!     }
//!   }
//! }
//! ```
//!
//! A criterion value is either a bare string (exact match) or an array of
//! acceptable strings. Anything else is rejected at load time: the offending
//! entry is skipped with a warning and the rest of the catalog still loads.
//!
//! ## Example
//!
//! ```rust,no_run
//! use patho_solver::PathologyCatalog;
//!
//! let catalog = PathologyCatalog::load_embedded().unwrap();
//! for pathology in catalog.entries() {
//!     println!("{}: {}", pathology.id, pathology.name);
//! }
//! ```

pub mod store;

pub use store::{CatalogError, PathologyCatalog, CATALOG_VERSION};
