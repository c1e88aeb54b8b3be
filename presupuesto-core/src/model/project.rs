//! Project entities: modules, standalone boards and hardware line items.
//!
//! Field names on the wire match the workshop's document database (Spanish
//! names like `ancho_mm`/`cantidad_modulos`), so exported project documents
//! load unchanged. Serde defaults implement the single "apply defaults"
//! normalization step: a document missing a numeric field gets the documented
//! fallback at ingestion, and calculation code never re-checks.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_DRAWER_HEIGHT_MM, DEFAULT_MODULE_DEPTH_MM, DEFAULT_MODULE_HEIGHT_MM,
    DEFAULT_MODULE_WIDTH_MM, DEFAULT_SHELF_DEPTH_MM, DEFAULT_SHELF_WIDTH_MM,
    DEFAULT_WOOD_DEPTH_MM, DEFAULT_WOOD_WIDTH_MM,
};
use crate::error::Result;
use crate::model::material::{de_opt_material_key, MaterialKey};

/// Category of a hardware line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HardwareCategory {
    /// Hinge.
    Bisagra,
    /// Drawer slide/runner.
    Corredera,
    /// Anything else. Unknown categories in stored documents normalize here.
    #[default]
    #[serde(rename = "Item general", other)]
    ItemGeneral,
}

/// A hardware line item: hinges, slides, screws, legs, anything priced per
/// unit. When bound to a catalog type the unit price comes from the catalog;
/// custom items carry a user-entered price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareItem {
    /// Type name (catalog reference or free text for custom items).
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub category: HardwareCategory,
    /// Unit count. May be fractional when aggregated from sub-assemblies.
    /// `None` means the document carried no quantity; callers choose the
    /// context-appropriate fallback (0 for the flat total, the drawer count
    /// for a drawer slide).
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Price per unit.
    #[serde(default)]
    pub price_unit: f64,
}

impl HardwareItem {
    /// Quantity with an explicit fallback for absent values.
    pub fn quantity_or(&self, fallback: f64) -> f64 {
        self.quantity.unwrap_or(fallback)
    }
}

/// Drawer-bank configuration attached to a module.
///
/// Drawers contribute hardware only (one slide line plus hinges); the carcass
/// surfaces already account for the material the drawers sit in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerBank {
    #[serde(default)]
    pub enabled: bool,
    /// Drawer system tag ("Magic", "Completo").
    #[serde(rename = "tipo", default = "default_drawer_type")]
    pub drawer_type: String,
    #[serde(rename = "cantidad_cajones", default)]
    pub drawer_count: u32,
    #[serde(rename = "material", default, deserialize_with = "de_opt_material_key")]
    pub material: Option<MaterialKey>,
    #[serde(rename = "ancho_mm", default)]
    pub width_mm: f64,
    #[serde(rename = "alto_mm", default = "default_drawer_height")]
    pub height_mm: f64,
    #[serde(rename = "profundo_mm", default)]
    pub depth_mm: f64,
    /// The slide/runner line for the whole bank.
    #[serde(rename = "corredera", default)]
    pub slide: Option<HardwareItem>,
    /// Hinges fitted with the bank.
    #[serde(rename = "bisagras", default)]
    pub hinges: Vec<HardwareItem>,
}

impl Default for DrawerBank {
    fn default() -> Self {
        Self {
            enabled: false,
            drawer_type: default_drawer_type(),
            drawer_count: 0,
            material: None,
            width_mm: 0.0,
            height_mm: DEFAULT_DRAWER_HEIGHT_MM,
            depth_mm: 0.0,
            slide: None,
            hinges: Vec::new(),
        }
    }
}

impl DrawerBank {
    /// Effective drawer count once enabled (a bank never has fewer than one).
    pub fn effective_count(&self) -> u32 {
        self.drawer_count.max(1)
    }
}

/// A cabinet carcass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "ancho_mm", default = "default_module_width")]
    pub width_mm: f64,
    #[serde(rename = "alto_mm", default = "default_module_height")]
    pub height_mm: f64,
    #[serde(rename = "profundo_mm", default = "default_module_depth")]
    pub depth_mm: f64,
    /// How many identical copies of this module the project includes.
    /// Multiplies every derived surface and every attached hardware quantity.
    #[serde(rename = "cantidad_modulos", default = "default_replication")]
    pub replication: u32,
    /// Primary carcass material.
    #[serde(default, deserialize_with = "de_opt_material_key")]
    pub material: Option<MaterialKey>,
    #[serde(rename = "tiene_fondo", default)]
    pub has_back: bool,
    /// Back-panel material; falls back to the primary material.
    #[serde(rename = "material_fondo", default, deserialize_with = "de_opt_material_key")]
    pub back_material: Option<MaterialKey>,
    #[serde(rename = "tiene_puertas", default)]
    pub has_doors: bool,
    #[serde(rename = "cantidad_puertas", default)]
    pub door_count: u32,
    /// Door material; falls back to the primary material.
    #[serde(rename = "material_puerta", default, deserialize_with = "de_opt_material_key")]
    pub door_material: Option<MaterialKey>,
    #[serde(rename = "cantidad_estantes", default)]
    pub shelf_count: u32,
    #[serde(rename = "cantidad_divisiones", default)]
    pub divider_count: u32,
    /// Hardware attached to this module (multiplied by replication).
    #[serde(rename = "herrajes", default)]
    pub hardware: Vec<HardwareItem>,
    #[serde(rename = "cajones", default)]
    pub drawers: Option<DrawerBank>,
}

impl Default for Module {
    fn default() -> Self {
        Self {
            name: String::new(),
            width_mm: DEFAULT_MODULE_WIDTH_MM,
            height_mm: DEFAULT_MODULE_HEIGHT_MM,
            depth_mm: DEFAULT_MODULE_DEPTH_MM,
            replication: 1,
            material: None,
            has_back: false,
            back_material: None,
            has_doors: false,
            door_count: 0,
            door_material: None,
            shelf_count: 0,
            divider_count: 0,
            hardware: Vec::new(),
            drawers: None,
        }
    }
}

impl Module {
    /// Replication count, never below one.
    pub fn replication(&self) -> u32 {
        self.replication.max(1)
    }

    /// Material for the back panel, falling back to the primary material.
    pub fn back_material(&self) -> Option<&MaterialKey> {
        self.back_material.as_ref().or(self.material.as_ref())
    }

    /// Material for the doors, falling back to the primary material.
    pub fn door_material(&self) -> Option<&MaterialKey> {
        self.door_material.as_ref().or(self.material.as_ref())
    }
}

/// A standalone shelf: flat stock with no height dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "ancho_mm", default = "default_shelf_width")]
    pub width_mm: f64,
    #[serde(rename = "profundo_mm", default = "default_shelf_depth")]
    pub depth_mm: f64,
    #[serde(rename = "cantidad", default = "default_replication")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "de_opt_material_key")]
    pub material: Option<MaterialKey>,
}

impl Default for Shelf {
    fn default() -> Self {
        Self {
            name: String::new(),
            width_mm: DEFAULT_SHELF_WIDTH_MM,
            depth_mm: DEFAULT_SHELF_DEPTH_MM,
            quantity: 1,
            material: None,
        }
    }
}

/// A loose board: same shape as [`Shelf`], different stock defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wood {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "ancho_mm", default = "default_wood_width")]
    pub width_mm: f64,
    #[serde(rename = "profundo_mm", default = "default_wood_depth")]
    pub depth_mm: f64,
    #[serde(rename = "cantidad", default = "default_replication")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "de_opt_material_key")]
    pub material: Option<MaterialKey>,
}

impl Default for Wood {
    fn default() -> Self {
        Self {
            name: String::new(),
            width_mm: DEFAULT_WOOD_WIDTH_MM,
            depth_mm: DEFAULT_WOOD_DEPTH_MM,
            quantity: 1,
            material: None,
        }
    }
}

/// A carpentry project: the full geometric description plus pricing inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
    #[serde(default)]
    pub woods: Vec<Wood>,
    /// Project-level hardware list. Flat: no per-module replication applies.
    #[serde(default)]
    pub hardwares: Vec<HardwareItem>,
    /// Declared base labor cost.
    #[serde(default)]
    pub labor_cost_project: f64,
    /// Complexity surcharge.
    #[serde(default)]
    pub extra_complexity: f64,
    /// Negotiated price override; `None` means "use the calculated total".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: String::new(),
            client: String::new(),
            status: default_status(),
            modules: Vec::new(),
            shelves: Vec::new(),
            woods: Vec::new(),
            hardwares: Vec::new(),
            labor_cost_project: 0.0,
            extra_complexity: 0.0,
            final_price: None,
        }
    }
}

impl Project {
    /// Parse a project from its JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the project has no costed entities at all.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
            && self.shelves.is_empty()
            && self.woods.is_empty()
            && self.hardwares.is_empty()
    }
}

fn default_module_width() -> f64 {
    DEFAULT_MODULE_WIDTH_MM
}

fn default_module_height() -> f64 {
    DEFAULT_MODULE_HEIGHT_MM
}

fn default_module_depth() -> f64 {
    DEFAULT_MODULE_DEPTH_MM
}

fn default_shelf_width() -> f64 {
    DEFAULT_SHELF_WIDTH_MM
}

fn default_shelf_depth() -> f64 {
    DEFAULT_SHELF_DEPTH_MM
}

fn default_wood_width() -> f64 {
    DEFAULT_WOOD_WIDTH_MM
}

fn default_wood_depth() -> f64 {
    DEFAULT_WOOD_DEPTH_MM
}

fn default_drawer_height() -> f64 {
    DEFAULT_DRAWER_HEIGHT_MM
}

fn default_drawer_type() -> String {
    "Magic".to_string()
}

fn default_replication() -> u32 {
    1
}

fn default_status() -> String {
    "Activo".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_module_defaults_from_empty_document() {
        let module: Module = serde_json::from_str("{}").unwrap();
        assert_eq!(module.width_mm, 1000.0);
        assert_eq!(module.height_mm, 2000.0);
        assert_eq!(module.depth_mm, 400.0);
        assert_eq!(module.replication, 1);
        assert!(!module.has_back);
        assert!(module.material.is_none());
    }

    #[test]
    fn test_module_material_fallbacks() {
        let primary = MaterialKey::new("MDF", "Blanco", 18.0);
        let back = MaterialKey::new("Chapadur", "Blanco", 3.0);

        let mut module = Module {
            material: Some(primary.clone()),
            ..Default::default()
        };
        assert_eq!(module.back_material(), Some(&primary));
        assert_eq!(module.door_material(), Some(&primary));

        module.back_material = Some(back.clone());
        assert_eq!(module.back_material(), Some(&back));
    }

    #[test]
    fn test_hardware_category_unknown_normalizes_to_general() {
        let item: HardwareItem =
            serde_json::from_str(r#"{"type": "Tornillo", "category": "Otra cosa"}"#).unwrap();
        assert_eq!(item.category, HardwareCategory::ItemGeneral);
    }

    #[test]
    fn test_hardware_quantity_fallback() {
        let item: HardwareItem = serde_json::from_str(r#"{"type": "Bisagra"}"#).unwrap();
        assert_eq!(item.quantity_or(0.0), 0.0);
        assert_eq!(item.quantity_or(3.0), 3.0);
    }

    #[test]
    fn test_project_from_legacy_document() {
        let json = r#"{
            "name": "Placard dormitorio",
            "client": "Fernández",
            "modules": [
                {"nombre": "Módulo 1", "ancho_mm": 900, "alto_mm": 1800,
                 "profundo_mm": 450, "cantidad_modulos": 2,
                 "material": {"type": "MDF", "color": "Blanco", "thickness_mm": 18},
                 "tiene_fondo": true,
                 "material_fondo": {"type": "Chapadur", "color": "Blanco", "thickness_mm": 3}}
            ],
            "shelves": [{"ancho_mm": 800, "profundo_mm": 300, "cantidad": 4}],
            "labor_cost_project": 200.0
        }"#;
        let project = Project::from_json(json).unwrap();
        assert_eq!(project.modules.len(), 1);
        assert_eq!(project.modules[0].replication(), 2);
        assert_eq!(project.shelves[0].quantity, 4);
        assert_eq!(project.status, "Activo");
        assert!(project.final_price.is_none());
    }

    #[test]
    fn test_legacy_string_material_keys_load() {
        // The original UI stored materials as the composite selectbox string,
        // "" when nothing was selected.
        let json = r#"{
            "modules": [
                {"ancho_mm": 900, "alto_mm": 1800, "profundo_mm": 450,
                 "material": "MDF_Blanco_18",
                 "tiene_fondo": true, "material_fondo": "",
                 "cajones": {"enabled": true, "cantidad_cajones": 2,
                             "material": "MDF_Blanco_18"}}
            ],
            "shelves": [{"ancho_mm": 800, "profundo_mm": 300, "material": "Paraiso_Natural_25"}],
            "woods": [{"ancho_mm": 500, "profundo_mm": 200, "material": ""}]
        }"#;
        let project = Project::from_json(json).unwrap();

        let module = &project.modules[0];
        assert_eq!(module.material, Some(MaterialKey::new("MDF", "Blanco", 18.0)));
        assert_eq!(module.back_material, None);
        assert_eq!(
            module.drawers.as_ref().unwrap().material,
            Some(MaterialKey::new("MDF", "Blanco", 18.0))
        );
        assert_eq!(
            project.shelves[0].material,
            Some(MaterialKey::new("Paraiso", "Natural", 25.0))
        );
        assert_eq!(project.woods[0].material, None);
    }

    #[test]
    fn test_object_material_keys_still_load() {
        let json = r#"{
            "modules": [
                {"material": {"type": "MDF", "color": "Blanco", "thickness_mm": 18}}
            ]
        }"#;
        let project = Project::from_json(json).unwrap();
        assert_eq!(
            project.modules[0].material,
            Some(MaterialKey::new("MDF", "Blanco", 18.0))
        );
    }

    #[test]
    fn test_drawer_bank_effective_count() {
        let bank = DrawerBank {
            enabled: true,
            drawer_count: 0,
            ..Default::default()
        };
        assert_eq!(bank.effective_count(), 1);
    }

    #[test]
    fn test_malformed_document_fails_fast() {
        assert!(Project::from_json(r#"{"modules": 42}"#).is_err());
    }
}
