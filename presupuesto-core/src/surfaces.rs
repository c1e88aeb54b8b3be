//! Geometry-to-surface translation.
//!
//! Turns each furniture entity into the rectangular surfaces it consumes,
//! without deducting panel thicknesses. Module replication is applied in one
//! place only, [`project_surfaces`], by scaling piece counts and total areas;
//! the per-module translator always describes a single carcass.

use crate::config::area_m2;
use crate::model::{Module, Project, Shelf, Surface, Wood};

/// Surfaces of a single module carcass (replication not applied).
///
/// Sides and horizontals always exist; back, doors, shelves and dividers only
/// when configured. Back and door panels use their own material when set,
/// falling back to the primary carcass material.
pub fn module_surfaces(module: &Module) -> Vec<Surface> {
    let mut surfaces = Vec::new();

    let width = module.width_mm;
    let height = module.height_mm;
    let depth = module.depth_mm;
    let material = module.material.clone();

    // 2 laterales: alto × profundo
    surfaces.push(Surface::new(
        "Lateral (x2)",
        material.clone(),
        area_m2(height, depth),
        2,
    ));

    // 2 horizontales: ancho × profundo
    surfaces.push(Surface::new(
        "Horizontal (x2)",
        material.clone(),
        area_m2(width, depth),
        2,
    ));

    // Fondo: ancho × alto
    if module.has_back {
        surfaces.push(Surface::new(
            "Fondo",
            module.back_material().cloned(),
            area_m2(width, height),
            1,
        ));
    }

    // Puertas: ancho × alto × cantidad
    if module.has_doors && module.door_count > 0 {
        surfaces.push(Surface::new(
            format!("Puerta (x{})", module.door_count),
            module.door_material().cloned(),
            area_m2(width, height),
            module.door_count,
        ));
    }

    // Estantes: ancho × profundo × cantidad
    if module.shelf_count > 0 {
        surfaces.push(Surface::new(
            format!("Estante (x{})", module.shelf_count),
            material.clone(),
            area_m2(width, depth),
            module.shelf_count,
        ));
    }

    // Divisiones: alto × profundo × cantidad
    if module.divider_count > 0 {
        surfaces.push(Surface::new(
            format!("División (x{})", module.divider_count),
            material,
            area_m2(height, depth),
            module.divider_count,
        ));
    }

    surfaces
}

/// Surface of a standalone shelf group.
pub fn shelf_surface(shelf: &Shelf) -> Surface {
    Surface::new(
        format!("Estante independiente (x{})", shelf.quantity),
        shelf.material.clone(),
        area_m2(shelf.width_mm, shelf.depth_mm),
        shelf.quantity,
    )
}

/// Surface of a loose board group.
pub fn wood_surface(wood: &Wood) -> Surface {
    Surface::new(
        format!("Madera (x{})", wood.quantity),
        wood.material.clone(),
        area_m2(wood.width_mm, wood.depth_mm),
        wood.quantity,
    )
}

/// All surfaces of a project.
///
/// This is the single point where module replication takes effect: each
/// module surface's count and total area scale by the replication factor, so
/// a module placed three times commits exactly three times the area of one.
pub fn project_surfaces(project: &Project) -> Vec<Surface> {
    let mut all = Vec::new();

    for module in &project.modules {
        let replication = module.replication();
        for mut surface in module_surfaces(module) {
            surface.count *= replication;
            surface.total_m2 = surface.unit_m2 * surface.count as f64;
            all.push(surface);
        }
    }

    for shelf in &project.shelves {
        all.push(shelf_surface(shelf));
    }

    for wood in &project.woods {
        all.push(wood_surface(wood));
    }

    all
}
