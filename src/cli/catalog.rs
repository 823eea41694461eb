use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::core::pathology::{Criterion, PathologyDefinition};
use crate::core::types::PathologyId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all pathologies in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by anatomical zone (substring, case-insensitive)
        #[arg(long)]
        zone: Option<String>,
    },

    /// Show details of a specific pathology
    Show {
        /// Pathology ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
pub fn run(args: CatalogArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, zone } => {
            let catalog = crate::cli::load_catalog(catalog.as_deref())?;
            let entries: Vec<&PathologyDefinition> = catalog
                .entries()
                .filter(|p| match (&zone, &p.zone) {
                    (None, _) => true,
                    (Some(wanted), Some(zone)) => {
                        zone.to_lowercase().contains(&wanted.to_lowercase())
                    }
                    (Some(_), None) => false,
                })
                .collect();
            list(&entries, format)?;
        }
        CatalogCommands::Show { id, catalog } => {
            let catalog = crate::cli::load_catalog(catalog.as_deref())?;
            let definition = catalog
                .get(&PathologyId::new(id.clone()))
                .ok_or_else(|| anyhow::anyhow!("pathology `{id}` not found in catalog"))?;
            show(definition, format)?;
        }
        CatalogCommands::Export { output, catalog } => {
            let catalog = crate::cli::load_catalog(catalog.as_deref())?;
            std::fs::write(&output, catalog.to_json()?)?;
            println!(
                "Exported {} pathologies to {}",
                catalog.len(),
                output.display()
            );
        }
    }
    Ok(())
}

fn list(entries: &[&PathologyDefinition], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "{:<28} {:<36} {:<18} criteria",
                "id", "pathology", "zone"
            );
            for definition in entries {
                println!(
                    "{:<28} {:<36} {:<18} {}",
                    definition.id.as_str(),
                    definition.name,
                    definition.zone.as_deref().unwrap_or("-"),
                    definition.criteria.len()
                );
            }
            println!("\n{} pathologies", entries.len());
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = entries
                .iter()
                .map(|definition| {
                    serde_json::json!({
                        "id": definition.id.as_str(),
                        "nom": definition.name,
                        "zone": definition.zone,
                        "criteria_count": definition.criteria.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn show(definition: &PathologyDefinition, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{} ({})", definition.name, definition.id);
            if let Some(zone) = &definition.zone {
                println!("Zone: {zone}");
            }
            println!("{}\n", definition.description);
            println!("Criteria:");
            for (attribute, criterion) in &definition.criteria {
                match criterion {
                    Criterion::Exact(value) => println!("  {attribute} = {value}"),
                    Criterion::OneOf(values) => {
                        println!("  {attribute} in [{}]", values.join(", "));
                    }
                }
            }
        }
        OutputFormat::Json => {
            let criteria: serde_json::Map<String, serde_json::Value> = definition
                .criteria
                .iter()
                .map(|(attribute, criterion)| (attribute.clone(), criterion.to_value()))
                .collect();
            let output = serde_json::json!({
                "id": definition.id.as_str(),
                "nom": definition.name,
                "description": definition.description,
                "zone": definition.zone,
                "criteres": criteria,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
