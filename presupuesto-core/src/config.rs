//! Default constants and cutting-service configuration.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default module width in mm.
pub const DEFAULT_MODULE_WIDTH_MM: f64 = 1000.0;

/// Default module height in mm.
pub const DEFAULT_MODULE_HEIGHT_MM: f64 = 2000.0;

/// Default module depth in mm.
pub const DEFAULT_MODULE_DEPTH_MM: f64 = 400.0;

/// Default standalone shelf width in mm.
pub const DEFAULT_SHELF_WIDTH_MM: f64 = 800.0;

/// Default standalone shelf depth in mm.
pub const DEFAULT_SHELF_DEPTH_MM: f64 = 300.0;

/// Default loose board width in mm.
pub const DEFAULT_WOOD_WIDTH_MM: f64 = 500.0;

/// Default loose board depth in mm.
pub const DEFAULT_WOOD_DEPTH_MM: f64 = 200.0;

/// Default drawer front height in mm.
pub const DEFAULT_DRAWER_HEIGHT_MM: f64 = 150.0;

/// Default cutting-service price per m².
pub const DEFAULT_CUTTING_PRICE_PER_M2: f64 = 0.0;

/// Default cutting-service waste factor.
pub const DEFAULT_CUTTING_WASTE_FACTOR: f64 = 0.10;

/// Convert two dimensions in millimeters to a surface area in m².
#[inline]
pub fn area_m2(dim_a_mm: f64, dim_b_mm: f64) -> f64 {
    (dim_a_mm / 1000.0) * (dim_b_mm / 1000.0)
}

/// Cutting/edge-banding service configuration.
///
/// Stored as a singleton reference document; when the document is absent the
/// workshop's defaults apply (no cutting charge, 10% cutting waste).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuttingConfig {
    /// Service price per m² of cut material.
    #[serde(default)]
    pub price_per_m2: f64,
    /// Fractional waste applied on top of the per-material waste.
    #[serde(default = "default_cutting_waste")]
    pub waste_factor: f64,
}

fn default_cutting_waste() -> f64 {
    DEFAULT_CUTTING_WASTE_FACTOR
}

impl Default for CuttingConfig {
    fn default() -> Self {
        Self {
            price_per_m2: DEFAULT_CUTTING_PRICE_PER_M2,
            waste_factor: DEFAULT_CUTTING_WASTE_FACTOR,
        }
    }
}

impl CuttingConfig {
    /// Create a config with an explicit price and waste factor.
    pub fn new(price_per_m2: f64, waste_factor: f64) -> Self {
        Self {
            price_per_m2,
            waste_factor,
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
