//! Material aggregation and whole-board packing.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::area_m2;
use crate::model::{Material, MaterialCatalog, MaterialKey, Surface};

/// Cost breakdown for one material.
///
/// Wire field names keep the legacy document shape consumed by the invoice
/// renderer (`m2_sin_desperdicio`, `m2_con_desperdicio`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaterialCost {
    /// Raw aggregated area in m².
    #[serde(rename = "m2_sin_desperdicio")]
    pub m2_total: f64,
    /// Area after the material's waste factor.
    #[serde(rename = "m2_con_desperdicio")]
    pub m2_with_waste: f64,
    /// Area of one board sheet in m².
    pub board_m2: f64,
    /// Whole boards to buy.
    pub boards_needed: u32,
    /// Price of one board.
    pub board_price: f64,
    /// `boards_needed × board_price`.
    pub material_cost: f64,
}

/// Group surfaces by material, summing total areas per bucket.
///
/// Surfaces without a material land in the unassigned bucket; it aggregates
/// like any other key but never matches a catalog entry, so it prices at zero.
pub fn group_by_material(surfaces: &[Surface]) -> BTreeMap<MaterialKey, f64> {
    let mut totals: BTreeMap<MaterialKey, f64> = BTreeMap::new();
    for surface in surfaces {
        *totals.entry(surface.bucket()).or_insert(0.0) += surface.total_m2;
    }
    totals
}

/// Pack an aggregated area into whole boards of one material.
///
/// Applies the material's waste factor, then rounds consumption up to whole
/// boards. A board with zero or negative sheet area yields a zero-cost result
/// instead of dividing by zero.
pub fn material_cost(m2_total: f64, material: &Material) -> MaterialCost {
    let m2_with_waste = m2_total * (1.0 + material.waste_factor);
    let board_m2 = area_m2(material.board_height_mm, material.board_width_mm);

    if board_m2 <= 0.0 {
        return MaterialCost {
            m2_total,
            m2_with_waste,
            board_m2,
            boards_needed: 0,
            board_price: material.board_price,
            material_cost: 0.0,
        };
    }

    let boards_needed = (m2_with_waste / board_m2).ceil() as u32;

    MaterialCost {
        m2_total,
        m2_with_waste,
        board_m2,
        boards_needed,
        board_price: material.board_price,
        material_cost: boards_needed as f64 * material.board_price,
    }
}

/// Price every aggregated material present in the catalog.
///
/// Keys absent from the catalog are skipped: they contribute nothing to the
/// breakdown or the material total. That is the defined behavior for orphaned
/// or not-yet-selected materials, not an error.
pub fn price_materials(
    totals: &BTreeMap<MaterialKey, f64>,
    catalog: &MaterialCatalog,
) -> BTreeMap<MaterialKey, MaterialCost> {
    let mut costs = BTreeMap::new();
    for (key, &m2_total) in totals {
        if let Some(material) = catalog.get(key) {
            costs.insert(key.clone(), material_cost(m2_total, material));
        }
    }
    costs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use pretty_assertions::assert_eq;

    fn board_material(waste: f64, price: f64) -> Material {
        Material {
            key: MaterialKey::new("MDF", "Blanco", 18.0),
            waste_factor: waste,
            board_height_mm: 2440.0,
            board_width_mm: 1220.0,
            board_price: price,
        }
    }

    #[test]
    fn test_group_by_material_sums_per_bucket() {
        let mdf = MaterialKey::new("MDF", "Blanco", 18.0);
        let surfaces = vec![
            Surface::new("Lateral (x2)", Some(mdf.clone()), 0.8, 2),
            Surface::new("Horizontal (x2)", Some(mdf.clone()), 0.4, 2),
            Surface::new("Madera (x1)", None, 0.1, 1),
        ];
        let totals = group_by_material(&surfaces);
        assert_eq!(totals.len(), 2);
        assert!(approx_eq(totals[&mdf], 2.4));
        assert!(approx_eq(totals[&MaterialKey::unassigned()], 0.1));
    }

    #[test]
    fn test_board_packing_rounds_up() {
        // 2.4 m² into 2.9768 m² boards: one board
        let cost = material_cost(2.4, &board_material(0.0, 50.0));
        assert_eq!(cost.boards_needed, 1);
        assert!(approx_eq(cost.material_cost, 50.0));
        assert!(approx_eq(cost.board_m2, 2.9768));

        // A hair over one board still buys two
        let cost = material_cost(3.0, &board_material(0.0, 50.0));
        assert_eq!(cost.boards_needed, 2);
        assert!(approx_eq(cost.material_cost, 100.0));
    }

    #[test]
    fn test_waste_factor_applies_before_packing() {
        let cost = material_cost(2.8, &board_material(0.10, 50.0));
        assert!(approx_eq(cost.m2_with_waste, 3.08));
        assert_eq!(cost.boards_needed, 2);
    }

    #[test]
    fn test_zero_board_area_is_degenerate_not_an_error() {
        let material = Material {
            board_height_mm: 0.0,
            board_width_mm: 0.0,
            ..board_material(0.10, 50.0)
        };
        let cost = material_cost(5.0, &material);
        assert_eq!(cost.boards_needed, 0);
        assert_eq!(cost.material_cost, 0.0);
        assert!(approx_eq(cost.m2_with_waste, 5.5));
    }

    #[test]
    fn test_orphan_materials_are_skipped() {
        let catalog = MaterialCatalog::new(vec![board_material(0.0, 50.0)]);
        let mut totals = BTreeMap::new();
        totals.insert(MaterialKey::new("MDF", "Blanco", 18.0), 2.4);
        totals.insert(MaterialKey::new("Paraiso", "Natural", 25.0), 3.0);
        totals.insert(MaterialKey::unassigned(), 1.0);

        let costs = price_materials(&totals, &catalog);
        assert_eq!(costs.len(), 1);
        assert!(costs.contains_key(&MaterialKey::new("MDF", "Blanco", 18.0)));
    }

    #[test]
    fn test_boards_needed_ceiling_property() {
        let material = board_material(0.12, 30.0);
        for area in [0.0, 0.5, 2.9, 2.9768, 3.0, 7.2, 11.1, 100.0] {
            let cost = material_cost(area, &material);
            let exact = cost.m2_with_waste / cost.board_m2;
            assert!(cost.boards_needed as f64 >= exact);
            assert!((cost.boards_needed as f64) - 1.0 < exact);
        }
    }
}
