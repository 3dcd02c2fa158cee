//! Read-only lookup tables for block definitions and category manifests
//!
//! Both catalogs are built once at process start and expose no mutation API
//! afterwards, so concurrent resolution calls can share them freely.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::types::{BlockDefinition, CategoryManifest};

/// Errors that can occur while constructing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share the same id
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// Catalog file could not be read
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog TOML could not be parsed
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML document shape for block catalogs: a list of `[[blocks]]` tables
#[derive(Deserialize)]
struct BlockFile {
    blocks: Vec<BlockDefinition>,
}

/// TOML document shape for category catalogs: a list of `[[categories]]` tables
#[derive(Deserialize)]
struct CategoryFile {
    categories: Vec<CategoryManifest>,
}

/// Immutable catalog of shared block definitions, indexed by id
#[derive(Debug, Clone, Default)]
pub struct BlockLibrary {
    blocks: HashMap<String, BlockDefinition>,
}

impl BlockLibrary {
    /// Build a library from block definitions, rejecting duplicate ids
    pub fn from_blocks(
        blocks: impl IntoIterator<Item = BlockDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for block in blocks {
            if map.contains_key(&block.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "block",
                    id: block.id,
                });
            }
            map.insert(block.id.clone(), block);
        }
        Ok(Self { blocks: map })
    }

    /// Load a library from catalog TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: BlockFile = toml::from_str(content)?;
        Self::from_blocks(parsed.blocks)
    }

    /// Load a library from a catalog TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Look up a block definition by id
    pub fn get(&self, id: &str) -> Option<&BlockDefinition> {
        self.blocks.get(id)
    }

    /// Check whether a block id exists
    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    /// Iterate over all block ids
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(|s| s.as_str())
    }

    /// Number of block definitions
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Immutable catalog of business category manifests, indexed by id
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: HashMap<String, CategoryManifest>,
}

impl CategoryCatalog {
    /// Build a catalog from category manifests, rejecting duplicate ids
    pub fn from_categories(
        categories: impl IntoIterator<Item = CategoryManifest>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for category in categories {
            if map.contains_key(&category.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "category",
                    id: category.id,
                });
            }
            map.insert(category.id.clone(), category);
        }
        Ok(Self { categories: map })
    }

    /// Load a catalog from catalog TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: CategoryFile = toml::from_str(content)?;
        Self::from_categories(parsed.categories)
    }

    /// Load a catalog from a catalog TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Look up a category manifest by id
    pub fn get(&self, id: &str) -> Option<&CategoryManifest> {
        self.categories.get(id)
    }

    /// Check whether a category id exists
    pub fn contains(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    /// Iterate over all category ids
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|s| s.as_str())
    }

    /// Number of category manifests
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::BlockUsage;

    #[test]
    fn test_library_from_blocks_and_get() {
        let library = BlockLibrary::from_blocks([
            BlockDefinition::new("hero", "header", "<Hero />"),
            BlockDefinition::new("footer", "footer", "<Footer />"),
        ])
        .expect("Should build");

        assert_eq!(library.len(), 2);
        assert!(library.contains("hero"));
        assert_eq!(library.get("footer").unwrap().base_template, "<Footer />");
        assert!(library.get("missing").is_none());
    }

    #[test]
    fn test_library_duplicate_id_error() {
        let result = BlockLibrary::from_blocks([
            BlockDefinition::new("hero", "header", "a"),
            BlockDefinition::new("hero", "header", "b"),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { kind: "block", .. })
        ));
    }

    #[test]
    fn test_catalog_duplicate_id_error() {
        let result = CategoryCatalog::from_categories([
            CategoryManifest::new("restaurant"),
            CategoryManifest::new("restaurant"),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId {
                kind: "category",
                ..
            })
        ));
    }

    #[test]
    fn test_library_from_toml() {
        let content = r#"
            [[blocks]]
            id = "hero"
            category = "header"
            baseTemplate = "<Hero title={title} />"

            [blocks.placeholders.title]
            type = "text"
            required = true
            maxLength = 60
            description = "Main headline"

            [[blocks.variants]]
            id = "hero-split"
            template = "<HeroSplit title={title} />"

            [blocks.variants.placeholderOverrides.title]
            maxLength = 40
        "#;

        let library = BlockLibrary::from_toml_str(content).expect("Should parse");
        let hero = library.get("hero").expect("hero present");
        assert_eq!(hero.placeholders["title"].max_length, Some(60));
        assert!(hero.placeholders["title"].required);
        let split = hero.variant("hero-split").expect("variant present");
        assert_eq!(split.placeholder_overrides["title"].max_length, Some(40));
    }

    #[test]
    fn test_catalog_from_toml() {
        let content = r#"
            [[categories]]
            id = "restaurant"
            keywords = ["dining", "food"]

            [[categories.blockUsages]]
            blockId = "hero"

            [[categories.blockUsages]]
            blockId = "gallery"
            required = false

            [categories.variantPools.hero]
            allowedVariants = ["hero-stats", "hero-split"]
            defaultVariant = "hero-stats"
        "#;

        let catalog = CategoryCatalog::from_toml_str(content).expect("Should parse");
        let restaurant = catalog.get("restaurant").expect("present");
        assert_eq!(restaurant.keywords, vec!["dining", "food"]);
        assert_eq!(restaurant.block_usages.len(), 2);
        assert_eq!(restaurant.block_usages[0], BlockUsage::new("hero"));
        assert!(!restaurant.block_usages[1].required);
        assert!(restaurant.variant_pools["hero"].allows("hero-split"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = BlockLibrary::from_toml_str("not valid toml {{{{");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
