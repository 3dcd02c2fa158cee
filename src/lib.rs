//! Sitesmith - manifest resolution for generated business websites
//!
//! Given a business category and an optional style signal, the engine decides
//! which reusable page-section blocks a site uses, which visual variant of
//! each, and how three layers of configuration (variant defaults, category
//! customization, caller-supplied ad-hoc overrides) merge into one final,
//! renderer-ready manifest. Content generation, image search and source-file
//! rendering are external collaborators that consume this crate's output.
//!
//! # Example
//!
//! ```rust
//! use sitesmith::resolve;
//!
//! let resolution = resolve("restaurant", &[], &[]).unwrap();
//! assert!(!resolution.manifest.blocks.is_empty());
//! assert_eq!(resolution.manifest.category, "restaurant");
//! ```

pub mod catalog;
pub mod error;
pub mod resolver;

pub use catalog::{
    AdHocOverride, BlockDefinition, BlockLibrary, BlockUsage, CatalogError, CategoryCatalog,
    CategoryManifest, ConcreteBlock, ConcreteManifest, PlaceholderPatch, PlaceholderSpec, Variant,
    VariantPool,
};
pub use error::ManifestResolutionError;
pub use resolver::{ManifestResolver, ProcessingStats, Resolution, SelectionStrategy};

/// Resolve a category against the built-in catalogs
///
/// This is the main entry point for quick use. Callers with their own
/// catalog data should build a [`ManifestResolver`] instead.
///
/// # Example
///
/// ```rust
/// use sitesmith::resolve;
///
/// let resolution = resolve("portfolio", &[], &["minimal".to_string()]).unwrap();
/// assert!(resolution.template_map.contains_key("hero"));
/// ```
pub fn resolve(
    category_id: &str,
    ad_hoc_overrides: &[AdHocOverride],
    keywords: &[String],
) -> Result<Resolution, ManifestResolutionError> {
    let resolver = ManifestResolver::new(BlockLibrary::builtin(), CategoryCatalog::builtin());
    resolver.resolve(category_id, ad_hoc_overrides, keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_restaurant() {
        let resolution = resolve("restaurant", &[], &[]).unwrap();
        assert_eq!(resolution.manifest.category, "restaurant");
        assert!(resolution.manifest.blocks.iter().any(|b| b.id == "hero"));
        assert!(resolution.stats.succeeded());
    }

    #[test]
    fn test_resolve_unknown_category() {
        let err = resolve("does-not-exist", &[], &[]).unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_resolve_with_ad_hoc_variant() {
        let overrides = [AdHocOverride::new("hero").with_variant("hero-split")];
        let resolution = resolve("restaurant", &overrides, &[]).unwrap();
        let hero = resolution
            .manifest
            .blocks
            .iter()
            .find(|b| b.id == "hero")
            .unwrap();
        assert_eq!(hero.metadata.variant_id.as_deref(), Some("hero-split"));
    }
}
