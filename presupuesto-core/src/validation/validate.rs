//! Validation logic for project documents.
//!
//! The calculation itself never fails on business conditions; validation is
//! where structural problems become errors (negative dimensions) and where
//! conditions that silently degrade the estimate become warnings (orphan
//! materials, doors with no count).

use crate::model::{MaterialCatalog, MaterialKey, Module, Project, Shelf, Wood};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a project against the catalog it will be priced with.
pub fn validate_project(project: &Project, catalog: &MaterialCatalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if project.is_empty() {
        result.add_warning("Project has no modules, boards or hardware; estimate will be zero");
    }

    for (idx, module) in project.modules.iter().enumerate() {
        result.merge(validate_module(module, catalog, idx));
    }

    for (idx, shelf) in project.shelves.iter().enumerate() {
        result.merge(validate_shelf(shelf, catalog, idx));
    }

    for (idx, wood) in project.woods.iter().enumerate() {
        result.merge(validate_wood(wood, catalog, idx));
    }

    result
}

fn validate_module(module: &Module, catalog: &MaterialCatalog, idx: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = entity_label("Module", &module.name, idx);

    if module.width_mm <= 0.0 || module.height_mm <= 0.0 || module.depth_mm <= 0.0 {
        result.add_error(format!(
            "{}: invalid dimensions ({}x{}x{} mm)",
            label, module.width_mm, module.height_mm, module.depth_mm
        ));
    }

    if module.replication == 0 {
        result.add_warning(format!("{}: replication count 0 treated as 1", label));
    }

    if module.has_doors && module.door_count == 0 {
        result.add_warning(format!("{}: doors enabled but door count is 0", label));
    }

    if let Some(drawers) = &module.drawers {
        if drawers.enabled && drawers.drawer_count == 0 {
            result.add_warning(format!(
                "{}: drawer bank enabled but drawer count is 0",
                label
            ));
        }
    }

    check_material(&mut result, catalog, &label, module.material.as_ref());
    if module.has_back {
        check_material(&mut result, catalog, &label, module.back_material());
    }
    if module.has_doors && module.door_count > 0 {
        check_material(&mut result, catalog, &label, module.door_material());
    }

    result
}

fn validate_shelf(shelf: &Shelf, catalog: &MaterialCatalog, idx: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = entity_label("Shelf", &shelf.name, idx);

    if shelf.width_mm <= 0.0 || shelf.depth_mm <= 0.0 {
        result.add_error(format!(
            "{}: invalid dimensions ({}x{} mm)",
            label, shelf.width_mm, shelf.depth_mm
        ));
    }
    check_material(&mut result, catalog, &label, shelf.material.as_ref());

    result
}

fn validate_wood(wood: &Wood, catalog: &MaterialCatalog, idx: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = entity_label("Wood", &wood.name, idx);

    if wood.width_mm <= 0.0 || wood.depth_mm <= 0.0 {
        result.add_error(format!(
            "{}: invalid dimensions ({}x{} mm)",
            label, wood.width_mm, wood.depth_mm
        ));
    }
    check_material(&mut result, catalog, &label, wood.material.as_ref());

    result
}

fn check_material(
    result: &mut ValidationResult,
    catalog: &MaterialCatalog,
    label: &str,
    key: Option<&MaterialKey>,
) {
    match key {
        None => result.add_warning(format!("{}: no material selected, priced at zero", label)),
        Some(key) if !catalog.contains(key) => result.add_warning(format!(
            "{}: material '{}' not in catalog, priced at zero",
            label, key
        )),
        Some(key) => {
            // Present in the catalog but with an unusable sheet size:
            // packing degenerates to zero boards.
            if let Some(material) = catalog.get(key) {
                if material.board_height_mm <= 0.0 || material.board_width_mm <= 0.0 {
                    result.add_warning(format!(
                        "{}: material '{}' has no board sheet size, priced at zero",
                        label, key
                    ));
                }
            }
        }
    }
}

fn entity_label(kind: &str, name: &str, idx: usize) -> String {
    if name.is_empty() {
        format!("{} {}", kind, idx + 1)
    } else {
        format!("{} {} ({})", kind, idx + 1, name)
    }
}
