//! Cost calculators: board packing, service costs and totalization.

pub mod boards;
pub mod services;
pub mod totals;

pub use boards::{group_by_material, material_cost, price_materials, MaterialCost};
pub use services::{cutting_cost, hardware_flat_total, hardware_summary, HardwareSummaryRow};
pub use totals::{labor_for_invoice, project_total, CostSummary};
