//! Catalogs of shared blocks and business categories
//!
//! The catalog side of the engine is purely declarative: block definitions
//! describe reusable page sections with typed placeholders and optional
//! variants, category manifests describe which blocks a business vertical
//! uses and how it customizes them. Both are loaded once (from TOML files or
//! the built-in definitions) into read-only lookup tables.

mod builtin;
mod library;
mod types;

pub use library::{BlockLibrary, CatalogError, CategoryCatalog};
pub use types::{
    AdHocOverride, BlockDefinition, BlockMetadata, BlockUsage, CategoryManifest, CategoryOverride,
    ConcreteBlock, ConcreteManifest, GlobalSettings, ManifestMetadata, PlaceholderPatch,
    PlaceholderSpec, PlaceholderType, Variant, VariantConstraints, VariantPool,
};
