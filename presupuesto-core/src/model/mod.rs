//! Data model: project entities, material catalog and derived surfaces.

pub mod material;
pub mod project;
pub mod surface;

pub use material::{Material, MaterialCatalog, MaterialKey};
pub use project::{DrawerBank, HardwareCategory, HardwareItem, Module, Project, Shelf, Wood};
pub use surface::Surface;
