//! Project totalization and the invoice labor back-solver.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::costing::boards::MaterialCost;
use crate::model::{MaterialKey, Surface};

/// Full calculation result for one project.
///
/// Ephemeral: recomputed on every read, never persisted as-is. Serializes to
/// the legacy result-document shape (`all_surfaces`, `material_totals`, ...)
/// with material map keys rendered as their composite labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    /// Every derived surface, in entity order.
    #[serde(rename = "all_surfaces")]
    pub surfaces: Vec<Surface>,
    /// Aggregated m² per material key, unassigned bucket included.
    #[serde(serialize_with = "labeled_map")]
    pub material_totals: BTreeMap<MaterialKey, f64>,
    /// Cost breakdown per material present in the catalog.
    #[serde(serialize_with = "labeled_map")]
    pub material_costs: BTreeMap<MaterialKey, MaterialCost>,
    /// Cutting/edge-banding service cost.
    pub cutting_cost: f64,
    /// Flat hardware total.
    pub hardware_total: f64,
    /// Materials + cutting + hardware + labor + complexity surcharge.
    pub total_calculated: f64,
    /// Negotiated price; defaults to `total_calculated`.
    pub final_price: f64,
    /// Labor figure for the invoice, back-solved from the final price.
    pub labor_for_invoice: f64,
    /// Sum of post-waste areas across all priced materials.
    #[serde(rename = "total_m2_con_desperdicio")]
    pub total_m2_with_waste: f64,
}

impl CostSummary {
    /// Sum of material costs over all priced materials.
    pub fn material_total(&self) -> f64 {
        self.material_costs
            .values()
            .map(|cost| cost.material_cost)
            .sum()
    }
}

/// Total calculated project cost.
pub fn project_total(
    material_costs: &BTreeMap<MaterialKey, MaterialCost>,
    cutting_cost: f64,
    hardware_total: f64,
    labor_cost: f64,
    extra_complexity: f64,
) -> f64 {
    let material_total: f64 = material_costs
        .values()
        .map(|cost| cost.material_cost)
        .sum();
    material_total + cutting_cost + hardware_total + labor_cost + extra_complexity
}

/// Labor figure to print on the invoice.
///
/// The invoice shows materials, cutting and hardware at their computed costs,
/// but its bottom line must equal the negotiated final price. The difference
/// between that price and the calculated total is absorbed entirely into the
/// labor line, which can therefore go negative on a discounted quote; that is
/// a valid, displayable result.
pub fn labor_for_invoice(
    labor_cost: f64,
    extra_complexity: f64,
    final_price: f64,
    total_calculated: f64,
) -> f64 {
    labor_cost + extra_complexity + (final_price - total_calculated)
}

fn labeled_map<V, S>(map: &BTreeMap<MaterialKey, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        out.serialize_entry(&key.label(), value)?;
    }
    out.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use pretty_assertions::assert_eq;

    fn costs_totalling(amounts: &[f64]) -> BTreeMap<MaterialKey, MaterialCost> {
        amounts
            .iter()
            .enumerate()
            .map(|(idx, &amount)| {
                (
                    MaterialKey::new(format!("M{idx}"), "", 18.0),
                    MaterialCost {
                        material_cost: amount,
                        ..Default::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_project_total_sums_all_components() {
        let costs = costs_totalling(&[100.0, 250.0]);
        let total = project_total(&costs, 55.0, 80.0, 200.0, 50.0);
        assert!(approx_eq(total, 735.0));
    }

    #[test]
    fn test_labor_back_solver_discount() {
        // Discounted quote absorbs the difference into labor
        assert!(approx_eq(
            labor_for_invoice(200.0, 50.0, 900.0, 1000.0),
            150.0
        ));
    }

    #[test]
    fn test_labor_back_solver_premium() {
        assert!(approx_eq(
            labor_for_invoice(200.0, 50.0, 1200.0, 1000.0),
            450.0
        ));
    }

    #[test]
    fn test_labor_back_solver_identity_at_default_price() {
        assert!(approx_eq(
            labor_for_invoice(200.0, 50.0, 1000.0, 1000.0),
            250.0
        ));
    }

    #[test]
    fn test_labor_can_go_negative() {
        assert!(labor_for_invoice(100.0, 0.0, 500.0, 800.0) < 0.0);
    }

    #[test]
    fn test_summary_serializes_labeled_map_keys() {
        let mut material_totals = BTreeMap::new();
        material_totals.insert(MaterialKey::new("MDF", "Blanco", 18.0), 2.4);
        material_totals.insert(MaterialKey::unassigned(), 0.5);

        let summary = CostSummary {
            surfaces: Vec::new(),
            material_totals,
            material_costs: BTreeMap::new(),
            cutting_cost: 0.0,
            hardware_total: 0.0,
            total_calculated: 0.0,
            final_price: 0.0,
            labor_for_invoice: 0.0,
            total_m2_with_waste: 0.0,
        };

        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        let totals = json["material_totals"].as_object().unwrap();
        assert!(totals.contains_key("MDF_Blanco_18"));
        assert!(totals.contains_key(""));
        assert_eq!(totals["MDF_Blanco_18"], 2.4);
    }
}
