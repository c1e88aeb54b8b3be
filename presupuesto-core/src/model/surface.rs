//! Derived rectangular surfaces: the intermediate unit of material
//! aggregation. Never persisted; recomputed on every calculation pass.

use serde::{Deserialize, Serialize};

use crate::model::material::MaterialKey;

/// One named rectangular surface cut from board stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Human-readable label, e.g. `Lateral (x2)` or `Puerta (x3)`.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Material this surface is cut from; `None` lands in the unassigned
    /// bucket, which aggregates but prices at zero.
    pub material: Option<MaterialKey>,
    /// Area of one piece in m².
    #[serde(rename = "m2_unitario")]
    pub unit_m2: f64,
    /// Total area in m² (`unit_m2 × count`).
    #[serde(rename = "m2_total")]
    pub total_m2: f64,
    /// Piece count, replication included.
    #[serde(rename = "cantidad")]
    pub count: u32,
}

impl Surface {
    /// Build a surface from a unit area and piece count.
    pub fn new(
        description: impl Into<String>,
        material: Option<MaterialKey>,
        unit_m2: f64,
        count: u32,
    ) -> Self {
        Self {
            description: description.into(),
            material,
            unit_m2,
            total_m2: unit_m2 * count as f64,
            count,
        }
    }

    /// The aggregation bucket this surface belongs to.
    pub fn bucket(&self) -> MaterialKey {
        self.material.clone().unwrap_or_default()
    }
}
