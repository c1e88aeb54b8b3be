//! Material reference catalog: board stock shared read-only across projects.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;

/// Composite identity of a board material: type, color and thickness.
///
/// Replaces the legacy `type_color_thickness` concatenated string key with a
/// value type under structural equality, so a color containing the delimiter
/// cannot collide with another key. [`fmt::Display`] still renders the legacy
/// composite label for document output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialKey {
    /// Material type name (e.g. "MDF", "Melamina").
    #[serde(rename = "type")]
    pub material_type: String,
    /// Color/finish name.
    #[serde(default)]
    pub color: String,
    /// Board thickness in mm. Fractional thicknesses (3.2 mm backs) are
    /// valid; stored documents may carry either `18` or `18.0`.
    #[serde(default)]
    pub thickness_mm: f64,
}

impl MaterialKey {
    /// Create a key from its three components.
    pub fn new(
        material_type: impl Into<String>,
        color: impl Into<String>,
        thickness_mm: f64,
    ) -> Self {
        Self {
            material_type: material_type.into(),
            color: color.into(),
            thickness_mm,
        }
    }

    /// The bucket used for entities with no material selected.
    pub fn unassigned() -> Self {
        Self::default()
    }

    /// Whether this is the unassigned bucket.
    pub fn is_unassigned(&self) -> bool {
        self.material_type.is_empty()
    }

    /// Legacy composite label (`type_color_thickness`), empty for the
    /// unassigned bucket. Used as the JSON map key in calculation results.
    pub fn label(&self) -> String {
        if self.is_unassigned() {
            String::new()
        } else {
            format!("{}_{}_{}", self.material_type, self.color, self.thickness_mm)
        }
    }

    /// Parse a legacy composite label (`type_color_thickness`).
    ///
    /// The empty label means "no material selected". Splits from the right:
    /// the last segment is the thickness, the one before it the color, the
    /// rest the type — so a type containing the delimiter survives, while a
    /// color containing it stays ambiguous (inherent to the legacy format).
    /// A string that is not a composite label at all is kept whole as the
    /// type, landing in an orphan bucket rather than failing the load.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.is_empty() {
            return None;
        }
        let mut parts = label.rsplitn(3, '_');
        let thickness = parts.next().and_then(|t| t.parse().ok());
        let color = parts.next();
        let material_type = parts.next();
        match (material_type, color, thickness) {
            (Some(material_type), Some(color), Some(thickness_mm)) => {
                Some(Self::new(material_type, color, thickness_mm))
            }
            _ => Some(Self::new(label, "", 0.0)),
        }
    }
}

impl PartialEq for MaterialKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MaterialKey {}

impl Ord for MaterialKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.material_type
            .cmp(&other.material_type)
            .then_with(|| self.color.cmp(&other.color))
            .then_with(|| self.thickness_mm.total_cmp(&other.thickness_mm))
    }
}

impl PartialOrd for MaterialKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for MaterialKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.material_type.hash(state);
        self.color.hash(state);
        self.thickness_mm.to_bits().hash(state);
    }
}

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Deserialize an optional material reference from either document form:
/// the object `{type, color, thickness_mm}` or the legacy composite string
/// the original UI stored (`"MDF_Blanco_18"`, `""` when unselected).
pub(crate) fn de_opt_material_key<'de, D>(deserializer: D) -> std::result::Result<Option<MaterialKey>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Key(MaterialKey),
        Label(String),
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        None => None,
        Some(Repr::Key(key)) => Some(key),
        Some(Repr::Label(label)) => MaterialKey::from_label(&label),
    })
}

/// A material catalog entry: board stock of a given type/color/thickness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Composite identity.
    #[serde(flatten)]
    pub key: MaterialKey,
    /// Fractional waste applied to raw area (0–1).
    #[serde(default)]
    pub waste_factor: f64,
    /// Usable board sheet height in mm.
    #[serde(default)]
    pub board_height_mm: f64,
    /// Usable board sheet width in mm.
    #[serde(default)]
    pub board_width_mm: f64,
    /// Price of one whole board.
    #[serde(default)]
    pub board_price: f64,
}

/// Read-only material catalog keyed by [`MaterialKey`].
///
/// Duplicate keys in the source list resolve last-wins, matching the
/// reference-data editor's behavior.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    entries: BTreeMap<MaterialKey, Material>,
}

impl MaterialCatalog {
    /// Build a catalog from a list of entries.
    pub fn new(materials: Vec<Material>) -> Self {
        let mut entries = BTreeMap::new();
        for material in materials {
            entries.insert(material.key.clone(), material);
        }
        Self { entries }
    }

    /// Parse a catalog from a JSON array of material documents.
    pub fn from_json(json: &str) -> Result<Self> {
        let materials: Vec<Material> = serde_json::from_str(json)?;
        Ok(Self::new(materials))
    }

    /// Look up a material by key.
    pub fn get(&self, key: &MaterialKey) -> Option<&Material> {
        self.entries.get(key)
    }

    /// Whether the catalog has an entry for this key.
    pub fn contains(&self, key: &MaterialKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over catalog entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&MaterialKey, &Material)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_label() {
        let key = MaterialKey::new("MDF", "Blanco", 18.0);
        assert_eq!(key.label(), "MDF_Blanco_18");
        assert_eq!(key.to_string(), "MDF_Blanco_18");
    }

    #[test]
    fn test_fractional_thickness_label() {
        let key = MaterialKey::new("Chapadur", "Blanco", 3.2);
        assert_eq!(key.label(), "Chapadur_Blanco_3.2");
    }

    #[test]
    fn test_unassigned_key_label_is_empty() {
        assert_eq!(MaterialKey::unassigned().label(), "");
        assert!(MaterialKey::unassigned().is_unassigned());
    }

    #[test]
    fn test_keys_with_delimiter_in_color_do_not_collide() {
        // Both render "MDF_Blanco_18_0" under the legacy concatenation
        let a = MaterialKey::new("MDF_Blanco", "18", 0.0);
        let b = MaterialKey::new("MDF", "Blanco_18", 0.0);
        assert_eq!(a.label(), b.label());
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_label_splits_from_the_right() {
        assert_eq!(
            MaterialKey::from_label("MDF_Blanco_18"),
            Some(MaterialKey::new("MDF", "Blanco", 18.0))
        );
        // Delimiter in the type survives the right-side split
        assert_eq!(
            MaterialKey::from_label("MDF_Laqueado_Negro_18"),
            Some(MaterialKey::new("MDF_Laqueado", "Negro", 18.0))
        );
        // Empty color segment
        assert_eq!(
            MaterialKey::from_label("MDF__18"),
            Some(MaterialKey::new("MDF", "", 18.0))
        );
    }

    #[test]
    fn test_from_label_empty_means_unassigned() {
        assert_eq!(MaterialKey::from_label(""), None);
    }

    #[test]
    fn test_from_label_keeps_non_composite_strings_whole() {
        assert_eq!(
            MaterialKey::from_label("Personalizado"),
            Some(MaterialKey::new("Personalizado", "", 0.0))
        );
    }

    #[test]
    fn test_catalog_last_wins_on_duplicates() {
        let key = MaterialKey::new("MDF", "Blanco", 18.0);
        let first = Material {
            key: key.clone(),
            board_price: 40.0,
            ..Default::default()
        };
        let second = Material {
            key: key.clone(),
            board_price: 55.0,
            ..Default::default()
        };
        let catalog = MaterialCatalog::new(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&key).unwrap().board_price, 55.0);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"type": "MDF", "color": "Blanco", "thickness_mm": 18,
             "waste_factor": 0.15, "board_height_mm": 2440, "board_width_mm": 1220,
             "board_price": 50.0}
        ]"#;
        let catalog = MaterialCatalog::from_json(json).unwrap();
        let material = catalog.get(&MaterialKey::new("MDF", "Blanco", 18.0)).unwrap();
        assert_eq!(material.waste_factor, 0.15);
        assert_eq!(material.board_height_mm, 2440.0);
    }

    #[test]
    fn test_catalog_accepts_float_thickness() {
        // Firestore round-trips integers as floats
        let json = r#"[
            {"type": "MDF", "color": "Blanco", "thickness_mm": 18.0,
             "waste_factor": 0.1, "board_height_mm": 2440, "board_width_mm": 1220,
             "board_price": 50.0}
        ]"#;
        let catalog = MaterialCatalog::from_json(json).unwrap();
        assert!(catalog.contains(&MaterialKey::new("MDF", "Blanco", 18.0)));
    }
}
