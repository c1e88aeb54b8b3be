//! presupuesto - Command-line front end for the carpentry estimating engine.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use presupuesto_core::{
    calculate_project_costs, hardware_summary, validate_project, CostSummary, CuttingConfig,
    MaterialCatalog, Project,
};

/// Compute the cost breakdown and quote figures for a carpentry project.
#[derive(Parser, Debug)]
#[command(name = "presupuesto")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project JSON document
    #[arg(short, long)]
    project: PathBuf,

    /// Material catalog JSON document (array of materials)
    #[arg(short, long)]
    materials: Option<PathBuf>,

    /// Cutting-service config JSON document
    #[arg(short, long)]
    cutting: Option<PathBuf>,

    /// Validate only, don't calculate
    #[arg(long)]
    validate: bool,

    /// Output the full calculation result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.project.display());

    let project_json = fs::read_to_string(&args.project)
        .with_context(|| format!("Failed to read {}", args.project.display()))?;
    let project = Project::from_json(&project_json)
        .with_context(|| format!("Failed to parse {}", args.project.display()))?;

    let catalog = match &args.materials {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            MaterialCatalog::from_json(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => {
            warn!("No material catalog given; all materials will price at zero");
            MaterialCatalog::default()
        }
    };

    let cutting = match &args.cutting {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => CuttingConfig::default(),
    };

    info!(
        "Loaded {} module(s), {} shelf group(s), {} board group(s), {} catalog material(s)",
        project.modules.len(),
        project.shelves.len(),
        project.woods.len(),
        catalog.len()
    );

    // Validate
    let validation = validate_project(&project, &catalog);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let summary = calculate_project_costs(&project, &catalog, &cutting);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&project, &summary);

    Ok(())
}

/// Print the human-readable cost breakdown.
fn print_summary(project: &Project, summary: &CostSummary) {
    if !project.name.is_empty() {
        println!("Proyecto: {}", project.name);
    }
    if !project.client.is_empty() {
        println!("Cliente:  {}", project.client);
    }
    println!();

    println!("Materiales:");
    if summary.material_costs.is_empty() {
        println!("  (sin materiales en catálogo)");
    }
    for (key, cost) in &summary.material_costs {
        println!(
            "  {:<32} {:>8.3} m²  {:>3} tablas  {:>10.2} €",
            key.label(),
            cost.m2_with_waste,
            cost.boards_needed,
            cost.material_cost
        );
    }

    println!();
    println!("Corte y canto:        {:>10.2} €", summary.cutting_cost);
    println!("Herrajes y extras:    {:>10.2} €", summary.hardware_total);

    let rows = hardware_summary(project);
    if !rows.is_empty() {
        println!();
        println!("Herrajes utilizados:");
        for row in &rows {
            println!(
                "  {:<32} x{:<7} {:>8.2} €  {:>10.2} €",
                row.type_name, row.quantity, row.price_unit, row.subtotal
            );
        }
    }

    println!();
    println!("Total calculado:      {:>10.2} €", summary.total_calculated);
    println!("Precio final:         {:>10.2} €", summary.final_price);
    println!("Mano de obra factura: {:>10.2} €", summary.labor_for_invoice);
}
