//! Integration tests for catalog loading

use sitesmith::catalog::{CatalogError, PlaceholderType};
use sitesmith::{BlockLibrary, CategoryCatalog, ManifestResolver};

#[test]
fn test_resolver_over_toml_catalogs() {
    let blocks = r#"
        [[blocks]]
        id = "banner"
        category = "header"
        baseTemplate = "<Banner text={text} />"

        [blocks.placeholders.text]
        type = "text"
        required = true
        maxLength = 40
        description = "Banner line"

        [[blocks.variants]]
        id = "banner-tall"
        template = "<BannerTall text={text} image={image} />"

        [blocks.variants.placeholderOverrides.image]
        type = "image"
        required = true
        description = "Background image"
    "#;

    let categories = r#"
        [[categories]]
        id = "demo"

        [[categories.blockUsages]]
        blockId = "banner"
        variantId = "banner-tall"
    "#;

    let library = BlockLibrary::from_toml_str(blocks).expect("Should parse blocks");
    let catalog = CategoryCatalog::from_toml_str(categories).expect("Should parse categories");
    let resolver = ManifestResolver::new(library, catalog);

    let resolution = resolver.resolve("demo", &[], &[]).expect("Should resolve");
    let banner = &resolution.manifest.blocks[0];
    assert_eq!(banner.metadata.variant_id.as_deref(), Some("banner-tall"));
    assert_eq!(banner.placeholders["image"].value_type, PlaceholderType::Image);
    assert_eq!(banner.metadata.placeholder_count, 2);
}

#[test]
fn test_duplicate_block_id_rejected() {
    let blocks = r#"
        [[blocks]]
        id = "banner"
        baseTemplate = "<A />"

        [[blocks]]
        id = "banner"
        baseTemplate = "<B />"
    "#;

    let result = BlockLibrary::from_toml_str(blocks);
    assert!(matches!(result, Err(CatalogError::DuplicateId { .. })));
}

#[test]
fn test_builtin_catalogs_are_consistent() {
    let library = BlockLibrary::builtin();
    let catalog = CategoryCatalog::builtin();

    for id in catalog.ids() {
        let category = catalog.get(id).unwrap();

        // Every usage points at a real block
        for usage in &category.block_usages {
            assert!(library.contains(&usage.block_id), "unknown block in {id}");
        }

        // Every pool member and default exists on its block
        for (block_id, pool) in &category.variant_pools {
            let block = library.get(block_id).expect("pool on known block");
            for variant_id in &pool.allowed_variants {
                assert!(
                    block.has_variant(variant_id),
                    "pool member {variant_id} missing on {block_id}"
                );
            }
            if let Some(default) = &pool.default_variant {
                assert!(pool.allows(default), "default {default} outside pool");
            }
        }
    }
}

#[test]
fn test_builtin_categories_resolve() {
    let library = BlockLibrary::builtin();
    let catalog = CategoryCatalog::builtin();
    let resolver = ManifestResolver::new(library, catalog);

    let ids: Vec<String> = resolver.catalog().ids().map(String::from).collect();
    assert!(!ids.is_empty());
    for id in ids {
        let resolution = resolver.resolve(&id, &[], &[]).expect("builtin resolves");
        assert!(!resolution.manifest.blocks.is_empty());
        assert!(resolution.stats.succeeded());
    }
}
