//! Service costs: cutting/edge-banding, hardware totals and the grouped
//! hardware itemization.

use serde::Serialize;

use crate::config::CuttingConfig;
use crate::model::{HardwareItem, Project};

/// Cutting/edge-banding service cost.
///
/// Charged over the sum of per-material post-waste areas; the cutting waste
/// factor compounds once more on top of that figure.
pub fn cutting_cost(total_m2_with_waste: f64, config: &CuttingConfig) -> f64 {
    total_m2_with_waste * config.price_per_m2 * (1.0 + config.waste_factor)
}

/// Flat hardware total over the project-level hardware list.
///
/// The authoritative figure that feeds the project total. Deliberately
/// unfiltered: non-positive quantities contribute zero but stay in the sum,
/// and per-module hardware is NOT included here (the flat list has no
/// replication concept). Contrast with [`hardware_summary`].
pub fn hardware_flat_total(hardwares: &[HardwareItem]) -> f64 {
    hardwares
        .iter()
        .map(|item| item.quantity_or(0.0) * item.price_unit)
        .sum()
}

/// One row of the grouped hardware itemization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HardwareSummaryRow {
    /// Hardware type name.
    #[serde(rename = "tipo")]
    pub type_name: String,
    /// Summed quantity across all sources.
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    /// Unit price (rows with equal names but different prices stay separate).
    #[serde(rename = "precio_unitario")]
    pub price_unit: f64,
    #[serde(rename = "subtotal")]
    pub subtotal: f64,
}

/// Grouped hardware itemization for the on-screen cost breakdown.
///
/// Walks the flat project list, every module's attached hardware (multiplied
/// by that module's replication count) and every drawer bank's slide and
/// hinges (also multiplied by replication), grouping by (type name, unit
/// price) and dropping rows whose grouped quantity is not positive.
///
/// This is a human-readable itemization, not the costed total: it filters
/// and replicates where [`hardware_flat_total`] does neither, so the two
/// figures legitimately differ and are never reconciled.
pub fn hardware_summary(project: &Project) -> Vec<HardwareSummaryRow> {
    let mut rows: Vec<HardwareSummaryRow> = Vec::new();

    let mut add_item = |item: &HardwareItem, multiplier: f64, fallback_qty: f64, default_name: &str| {
        let type_name = if item.type_name.is_empty() {
            default_name.to_string()
        } else {
            item.type_name.clone()
        };
        let quantity = item.quantity_or(fallback_qty) * multiplier;
        if quantity <= 0.0 {
            return;
        }

        match rows
            .iter()
            .position(|row| row.type_name == type_name && row.price_unit == item.price_unit)
        {
            Some(idx) => {
                rows[idx].quantity += quantity;
                rows[idx].subtotal += quantity * item.price_unit;
            }
            None => rows.push(HardwareSummaryRow {
                type_name,
                quantity,
                price_unit: item.price_unit,
                subtotal: quantity * item.price_unit,
            }),
        }
    };

    for hardware in &project.hardwares {
        add_item(hardware, 1.0, 0.0, "Herraje");
    }

    for module in &project.modules {
        let multiplier = module.replication() as f64;

        for hardware in &module.hardware {
            add_item(hardware, multiplier, 0.0, "Herraje");
        }

        if let Some(drawers) = &module.drawers {
            if drawers.enabled {
                let drawer_qty = drawers.effective_count() as f64;
                if let Some(slide) = &drawers.slide {
                    // A slide without its own quantity serves every drawer.
                    add_item(slide, multiplier, drawer_qty, "Corredera cajón");
                }
                for hinge in &drawers.hinges {
                    add_item(hinge, multiplier, 0.0, "Herraje");
                }
            }
        }
    }

    rows.sort_by(|a, b| a.type_name.cmp(&b.type_name));
    rows
}
