//! Web server for browser-based diagnosis.
//!
//! A small Axum application serving the intake form and a JSON API. The
//! catalog is loaded once at startup (degrading to empty if unavailable) and
//! shared immutably across requests; diagnosis calls are pure and need no
//! synchronization.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! patho-solver serve
//!
//! # Custom port, custom catalog, auto-open browser
//! patho-solver serve --port 3000 --catalog my_catalog.json --open
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Intake questionnaire form
//! - `POST /api/diagnosis` - Diagnose a JSON symptom vector (404 = no match)
//! - `GET /api/pathologies` - Full catalog as JSON
//! - `GET /api/attributes` - Recognized attribute names

pub mod server;
