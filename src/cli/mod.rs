//! Command-line interface for patho-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **diagnose**: Run a symptom questionnaire against the pathology catalog
//! - **score**: Show the match percentage of every catalog entry
//! - **catalog**: List, show, or export pathologies from the catalog
//! - **serve**: Start the web interface
//!
//! ## Usage
//!
//! ```text
//! # Diagnose from a JSON questionnaire
//! patho-solver diagnose answers.json
//!
//! # Pipe attribute=value lines from stdin
//! printf 'siege=Lombaire\ntype_douleur=mecanique\n' | patho-solver diagnose -
//!
//! # JSON output for scripting
//! patho-solver diagnose answers.json --format json
//!
//! # See how every pathology scored
//! patho-solver score answers.json
//!
//! # Start web UI
//! patho-solver serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::catalog::store::PathologyCatalog;

pub mod catalog;
pub mod diagnose;
pub mod score;

#[derive(Parser)]
#[command(name = "patho-solver")]
#[command(version)]
#[command(about = "Match symptom questionnaires against a catalog of musculoskeletal pathologies")]
#[command(
    long_about = "patho-solver is a teaching aid for osteopathy students.\n\nIt scores a structured symptom questionnaire against a catalog of pathology definitions and reports the best-matching pathology with its confidence, or an explicit \"no diagnosis\" when nothing clears the confidence gate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diagnose a symptom questionnaire
    Diagnose(diagnose::DiagnoseArgs),

    /// Show the match percentage of every pathology in the catalog
    Score(score::ScoreArgs),

    /// Manage the pathology catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Path to custom catalog file (defaults to the embedded catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the catalog for a CLI command. Unlike the server, which degrades to
/// an empty catalog, a CLI invocation with an unreadable catalog is an error.
pub(crate) fn load_catalog(path: Option<&Path>) -> anyhow::Result<PathologyCatalog> {
    let catalog = match path {
        Some(p) => PathologyCatalog::load_from_file(p)?,
        None => PathologyCatalog::load_embedded()?,
    };
    Ok(catalog)
}
