use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::engine::{MatchingEngine, ScoredPathology, DEFAULT_MIN_CONFIDENCE};
use crate::matching::scoring::round_for_display;
use crate::parsing;

#[derive(Args)]
pub struct ScoreArgs {
    /// Questionnaire answers (JSON object or attribute=value lines).
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path to custom catalog file (defaults to the embedded catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute score subcommand: print every pathology's match percentage, best
/// first. Intended for teaching - it shows why the engine picked (or
/// rejected) a candidate.
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let vector = parsing::load_vector(&args.input)?;
    let catalog = crate::cli::load_catalog(args.catalog.as_deref())?;

    if verbose {
        eprintln!(
            "Scoring {} answers against {} pathologies",
            vector.len(),
            catalog.len()
        );
    }

    let engine = MatchingEngine::new(&catalog);
    let mut scores = engine.score_all(&vector);
    // Stable sort: ties stay in catalog enumeration order, matching the
    // engine's first-seen tie-break
    scores.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    match format {
        OutputFormat::Text => print_text(&scores),
        OutputFormat::Json => print_json(&scores)?,
    }

    Ok(())
}

fn print_text(scores: &[ScoredPathology]) {
    if scores.is_empty() {
        println!("Catalog is empty: nothing to score.");
        return;
    }

    println!("{:<30} {:>8}  pathology", "id", "match");
    let mut threshold_drawn = false;
    for score in scores {
        if !threshold_drawn && score.percentage <= DEFAULT_MIN_CONFIDENCE {
            println!("{:-<30} {:->8}  below {DEFAULT_MIN_CONFIDENCE}% gate", "", "");
            threshold_drawn = true;
        }
        println!(
            "{:<30} {:>7.1}%  {}",
            score.pathology_id.as_str(),
            round_for_display(score.percentage),
            score.name
        );
    }
}

fn print_json(scores: &[ScoredPathology]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = scores
        .iter()
        .map(|score| {
            serde_json::json!({
                "id": score.pathology_id.as_str(),
                "nom": score.name,
                "percentage": round_for_display(score.percentage),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
