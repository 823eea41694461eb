use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::engine::{
    MatchResult, MatchingConfig, MatchingEngine, ThresholdPolicy, DEFAULT_MIN_CONFIDENCE,
};
use crate::parsing;

#[derive(Args)]
pub struct DiagnoseArgs {
    /// Questionnaire answers (JSON object or attribute=value lines).
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path to custom catalog file (defaults to the embedded catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Minimum match percentage a candidate must clear
    #[arg(long, default_value_t = DEFAULT_MIN_CONFIDENCE)]
    pub min_confidence: f64,

    /// Accept a candidate at exactly the minimum (>= instead of strict >)
    #[arg(long)]
    pub inclusive: bool,
}

impl DiagnoseArgs {
    pub(crate) fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            min_confidence: self.min_confidence,
            threshold_policy: if self.inclusive {
                ThresholdPolicy::Inclusive
            } else {
                ThresholdPolicy::Exclusive
            },
        }
    }
}

/// Execute diagnose subcommand.
///
/// "No diagnosis" is a normal outcome and exits 0; only unreadable input or
/// an unreadable custom catalog is an error.
pub fn run(args: DiagnoseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let vector = parsing::load_vector(&args.input)?;

    if verbose {
        eprintln!(
            "Parsed {} answers ({} with recognized attribute names)",
            vector.len(),
            vector.recognized_count()
        );
    }

    let catalog = crate::cli::load_catalog(args.catalog.as_deref())?;
    if verbose {
        eprintln!("Catalog: {} pathologies", catalog.len());
    }

    let engine = MatchingEngine::with_config(&catalog, args.matching_config());
    let result = engine.diagnose(&vector);

    match format {
        OutputFormat::Text => print_text(result.as_ref()),
        OutputFormat::Json => print_json(result.as_ref())?,
    }

    Ok(())
}

fn print_text(result: Option<&MatchResult>) {
    match result {
        Some(result) => {
            println!("Diagnosis: {}", result.name);
            println!(
                "Confidence: {:.1}% ({})",
                result.display_confidence(),
                result.level
            );
            if let Some(zone) = &result.zone {
                println!("Zone: {zone}");
            }
            println!("Id: {}", result.pathology_id);
            println!();
            println!("{}", result.description);
        }
        None => {
            println!("No diagnosis: no pathology matches the answers closely enough.");
        }
    }
}

fn print_json(result: Option<&MatchResult>) -> anyhow::Result<()> {
    let output = match result {
        Some(result) => serde_json::json!({
            "success": true,
            "diagnosis": {
                "id": result.pathology_id.as_str(),
                "nom": result.name,
                "description": result.description,
                "zone": result.zone,
                "confidence": result.display_confidence(),
            },
        }),
        None => serde_json::json!({
            "success": false,
            "message": "Aucune pathologie trouvée",
        }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
