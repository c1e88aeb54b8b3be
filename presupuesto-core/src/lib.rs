//! presupuesto-core - Cost calculation engine for carpentry workshop estimates.
//!
//! This library turns a project's geometric description (cabinet modules,
//! standalone shelves, loose boards, hardware lists, drawer banks) into
//! material surface areas, whole-board consumption, material cost, cutting
//! service cost, hardware cost and the invoice-ready labor figure.
//!
//! The engine is a pure, stateless function over in-memory data: it reads a
//! project and the shared reference catalogs and allocates a fresh
//! [`CostSummary`]. No I/O, no caching, safe to call concurrently.
//!
//! # Example
//!
//! ```no_run
//! use presupuesto_core::{calculate_project_costs, CuttingConfig, MaterialCatalog, Project};
//!
//! let project = Project::from_json(r#"{"modules": []}"#).unwrap();
//! let catalog = MaterialCatalog::default();
//! let summary = calculate_project_costs(&project, &catalog, &CuttingConfig::default());
//! println!("{:.2} €", summary.total_calculated);
//! ```

pub mod config;
pub mod costing;
pub mod error;
pub mod model;
pub mod surfaces;
pub mod validation;

// Re-exports for convenience
pub use config::{area_m2, CuttingConfig};
pub use costing::{
    cutting_cost, hardware_flat_total, hardware_summary, labor_for_invoice, CostSummary,
    HardwareSummaryRow, MaterialCost,
};
pub use error::{EstimateError, Result};
pub use model::{
    DrawerBank, HardwareCategory, HardwareItem, Material, MaterialCatalog, MaterialKey, Module,
    Project, Shelf, Surface, Wood,
};
pub use surfaces::{module_surfaces, project_surfaces, shelf_surface, wood_surface};
pub use validation::{validate_project, ValidationResult};

/// Compute the full cost breakdown for a project.
///
/// The complete pipeline: translate every entity to surfaces, aggregate per
/// material, pack into whole boards, price the cutting service and hardware,
/// totalize, and back-solve the invoice labor figure from the final price.
///
/// Total over its documented input domain: degenerate inputs (empty project,
/// orphan materials, zero board sheets) produce degenerate zero-cost outputs,
/// never errors.
pub fn calculate_project_costs(
    project: &Project,
    catalog: &MaterialCatalog,
    cutting: &CuttingConfig,
) -> CostSummary {
    let surfaces = surfaces::project_surfaces(project);

    let material_totals = costing::group_by_material(&surfaces);
    let material_costs = costing::price_materials(&material_totals, catalog);

    let total_m2_with_waste: f64 = material_costs
        .values()
        .map(|cost| cost.m2_with_waste)
        .sum();

    let cutting_cost = costing::cutting_cost(total_m2_with_waste, cutting);
    let hardware_total = costing::hardware_flat_total(&project.hardwares);

    let total_calculated = costing::project_total(
        &material_costs,
        cutting_cost,
        hardware_total,
        project.labor_cost_project,
        project.extra_complexity,
    );

    let final_price = project.final_price.unwrap_or(total_calculated);
    let labor_for_invoice = costing::labor_for_invoice(
        project.labor_cost_project,
        project.extra_complexity,
        final_price,
        total_calculated,
    );

    CostSummary {
        surfaces,
        material_totals,
        material_costs,
        cutting_cost,
        hardware_total,
        total_calculated,
        final_price,
        labor_for_invoice,
        total_m2_with_waste,
    }
}

/// Validate a project, then compute its cost breakdown.
///
/// The high-level entry point for callers working from untrusted documents:
/// validation warnings are logged and the calculation proceeds; validation
/// errors (dimensions outside the documented shape) abort with
/// [`EstimateError::InvalidProject`].
pub fn estimate_project(
    project: &Project,
    catalog: &MaterialCatalog,
    cutting: &CuttingConfig,
) -> Result<CostSummary> {
    let validation = validate_project(project, catalog);

    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    if !validation.passed {
        return Err(EstimateError::InvalidProject {
            errors: validation.errors,
        });
    }

    Ok(calculate_project_costs(project, catalog, cutting))
}
