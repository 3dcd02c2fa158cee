//! Manifest resolution - orchestrates selection and merging per block
//!
//! The resolver walks a category's block usages in declared order, runs
//! variant selection and override merging for each required usage, and
//! assembles the renderer-ready [`ConcreteManifest`] together with a
//! template-map projection and a call-scoped processing trace.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::{
    AdHocOverride, BlockLibrary, BlockMetadata, CategoryCatalog, ConcreteBlock, ConcreteManifest,
    ManifestMetadata,
};
use crate::error::ManifestResolutionError;
use crate::resolver::merger::merge_block;
use crate::resolver::selector::{select_variant, SelectionStrategy, UniformRandom};
use crate::resolver::stats::{ProcessingStats, StepTimer};

/// Schema version stamped on every generated manifest
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Everything one resolution call produces
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The renderer-ready manifest
    pub manifest: ConcreteManifest,

    /// Convenience projection: block id -> final template text
    pub template_map: BTreeMap<String, String>,

    /// Diagnostic trace for this call
    pub stats: ProcessingStats,
}

/// Resolves category manifests against immutable catalogs
///
/// Holds no mutable state between calls; `resolve` takes `&self` and
/// concurrent calls against one resolver are safe.
pub struct ManifestResolver {
    library: BlockLibrary,
    catalog: CategoryCatalog,
    strategy: Box<dyn SelectionStrategy>,
}

impl ManifestResolver {
    /// Create a resolver over the given catalogs with the default random strategy
    pub fn new(library: BlockLibrary, catalog: CategoryCatalog) -> Self {
        Self {
            library,
            catalog,
            strategy: Box::new(UniformRandom),
        }
    }

    /// Replace the random-selection strategy (deterministic stubs in tests)
    pub fn with_strategy(mut self, strategy: Box<dyn SelectionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// The block library this resolver reads from
    pub fn library(&self) -> &BlockLibrary {
        &self.library
    }

    /// The category catalog this resolver reads from
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Resolve one category into a concrete manifest
    ///
    /// Returns a complete [`Resolution`] or exactly one
    /// [`ManifestResolutionError`]; never a partial manifest. Bad variant
    /// references are recovered from with a warning, unknown category or
    /// block ids are fatal.
    pub fn resolve(
        &self,
        category_id: &str,
        ad_hoc_overrides: &[AdHocOverride],
        keywords: &[String],
    ) -> Result<Resolution, ManifestResolutionError> {
        let mut stats = ProcessingStats::new();

        let lookup = StepTimer::start("lookup-category");
        let category = match self.catalog.get(category_id) {
            Some(category) => {
                stats.complete(lookup);
                category
            }
            None => {
                let err = ManifestResolutionError::unknown_category(category_id);
                stats.fail(lookup, &err);
                return Err(err);
            }
        };

        let mut blocks = Vec::new();
        let mut template_map = BTreeMap::new();
        let mut manifest_overrides: Vec<String> = Vec::new();

        for usage in &category.block_usages {
            if !usage.required {
                debug!(block = %usage.block_id, "skipping optional block usage");
                continue;
            }

            let timer = StepTimer::start(format!("block:{}", usage.block_id));

            let Some(block) = self.library.get(&usage.block_id) else {
                let err = ManifestResolutionError::block(
                    &usage.block_id,
                    category_id,
                    "unknown block id",
                );
                stats.fail(timer, &err);
                return Err(err);
            };

            let ad_hoc = ad_hoc_overrides.iter().find(|o| o.block_id == usage.block_id);
            let pool = category.variant_pools.get(&usage.block_id);

            let selection =
                select_variant(usage, pool, ad_hoc, keywords, self.strategy.as_ref());

            // A selected id missing from the block's variant list is
            // non-fatal: the block falls back to its base template.
            let variant = match selection.variant_id.as_deref() {
                Some(id) => {
                    let variant = block.variant(id);
                    if variant.is_none() {
                        warn!(
                            block = %usage.block_id,
                            variant = %id,
                            "selected variant not defined on block, using base template"
                        );
                    }
                    variant
                }
                None => None,
            };

            let merged = merge_block(
                block,
                variant,
                usage,
                category.overrides.get(&usage.block_id),
                ad_hoc,
            );

            for label in &merged.applied_overrides {
                if !manifest_overrides.contains(label) {
                    manifest_overrides.push(label.clone());
                }
            }

            template_map.insert(usage.block_id.clone(), merged.template.clone());

            let detail = match variant {
                Some(variant) => format!("variant={} ({:?})", variant.id, selection.decision),
                None => format!("base template ({:?})", selection.decision),
            };
            stats.complete(timer.with_detail(detail));

            blocks.push(ConcreteBlock {
                id: usage.block_id.clone(),
                metadata: BlockMetadata {
                    source_block_id: block.id.clone(),
                    variant_id: variant.map(|v| v.id.clone()),
                    placeholder_count: merged.placeholders.len(),
                    template_length: merged.template.len(),
                },
                template: merged.template,
                placeholders: merged.placeholders,
                applied_overrides: merged.applied_overrides,
            });
        }

        let assemble = StepTimer::start("assemble-manifest");
        let manifest = ConcreteManifest {
            category: category.id.clone(),
            global_settings: category.global_settings.clone(),
            metadata: ManifestMetadata {
                version: MANIFEST_VERSION.to_string(),
                generated_at: Utc::now().to_rfc3339(),
                total_blocks: blocks.len(),
                applied_overrides: manifest_overrides,
            },
            blocks,
        };
        stats.complete(assemble);

        Ok(Resolution {
            manifest,
            template_map,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        BlockDefinition, BlockUsage, CategoryManifest, PlaceholderSpec, Variant, VariantPool,
    };
    use pretty_assertions::assert_eq;

    fn library() -> BlockLibrary {
        BlockLibrary::from_blocks([
            BlockDefinition::new("hero", "header", "<Hero title={title} />")
                .with_placeholder("title", PlaceholderSpec::text("headline").required())
                .with_variant(Variant::new("hero-stats", "<HeroStats title={title} />"))
                .with_variant(Variant::new("hero-split", "<HeroSplit title={title} />")),
            BlockDefinition::new("footer", "footer", "<Footer />"),
        ])
        .unwrap()
    }

    fn catalog(category: CategoryManifest) -> CategoryCatalog {
        CategoryCatalog::from_categories([category]).unwrap()
    }

    #[test]
    fn test_resolve_block_count_and_order() {
        let category = CategoryManifest::new("demo")
            .with_usage(BlockUsage::new("hero"))
            .with_usage(BlockUsage::new("footer").optional())
            .with_usage(BlockUsage::new("footer"));
        let resolver = ManifestResolver::new(library(), catalog(category));

        let resolution = resolver.resolve("demo", &[], &[]).expect("Should resolve");
        let ids: Vec<&str> = resolution
            .manifest
            .blocks
            .iter()
            .map(|b| b.id.as_str())
            .collect();

        // Optional usage skipped; declaration order preserved
        assert_eq!(ids, vec!["hero", "footer"]);
        assert_eq!(resolution.manifest.metadata.total_blocks, 2);
    }

    #[test]
    fn test_unknown_category_is_fatal() {
        let resolver = ManifestResolver::new(library(), catalog(CategoryManifest::new("demo")));
        let err = resolver.resolve("missing", &[], &[]).unwrap_err();
        assert!(matches!(
            err,
            ManifestResolutionError::UnknownCategory { .. }
        ));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_unknown_required_block_is_fatal() {
        let category = CategoryManifest::new("demo").with_usage(BlockUsage::new("ghost"));
        let resolver = ManifestResolver::new(library(), catalog(category));

        let err = resolver.resolve("demo", &[], &[]).unwrap_err();
        match err {
            ManifestResolutionError::BlockResolution {
                block_id,
                category_id,
                ..
            } => {
                assert_eq!(block_id, "ghost");
                assert_eq!(category_id, "demo");
            }
            other => panic!("Expected BlockResolution, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_optional_block_is_skipped() {
        let category = CategoryManifest::new("demo")
            .with_usage(BlockUsage::new("ghost").optional())
            .with_usage(BlockUsage::new("hero"));
        let resolver = ManifestResolver::new(library(), catalog(category));

        let resolution = resolver.resolve("demo", &[], &[]).expect("Should resolve");
        assert_eq!(resolution.manifest.blocks.len(), 1);
    }

    #[test]
    fn test_bad_variant_reference_falls_back_to_base() {
        let category = CategoryManifest::new("demo")
            .with_usage(BlockUsage::new("hero").with_variant("hero-video"));
        let resolver = ManifestResolver::new(library(), catalog(category));

        let resolution = resolver.resolve("demo", &[], &[]).expect("Should resolve");
        let hero = &resolution.manifest.blocks[0];
        assert_eq!(hero.template, "<Hero title={title} />");
        assert_eq!(hero.metadata.variant_id, None);
        assert!(hero.applied_overrides.is_empty());
    }

    #[test]
    fn test_pool_default_variant_applies() {
        let category = CategoryManifest::new("demo")
            .with_usage(BlockUsage::new("hero"))
            .with_pool(
                "hero",
                VariantPool::new(["hero-stats", "hero-split"]).with_default("hero-stats"),
            );
        let resolver = ManifestResolver::new(library(), catalog(category));

        let resolution = resolver.resolve("demo", &[], &[]).expect("Should resolve");
        let hero = &resolution.manifest.blocks[0];
        assert_eq!(hero.metadata.variant_id.as_deref(), Some("hero-stats"));
        assert_eq!(hero.applied_overrides, vec!["variant-hero-stats"]);
        assert_eq!(
            resolution.template_map["hero"],
            "<HeroStats title={title} />"
        );
    }

    #[test]
    fn test_manifest_metadata() {
        let category = CategoryManifest::new("demo")
            .with_usage(BlockUsage::new("hero"))
            .with_pool("hero", VariantPool::new(["hero-stats"]).with_default("hero-stats"));
        let resolver = ManifestResolver::new(library(), catalog(category));

        let resolution = resolver.resolve("demo", &[], &[]).expect("Should resolve");
        let metadata = &resolution.manifest.metadata;
        assert_eq!(metadata.version, MANIFEST_VERSION);
        assert_eq!(metadata.total_blocks, 1);
        assert_eq!(metadata.applied_overrides, vec!["variant-hero-stats"]);
        // RFC 3339 timestamps parse back
        assert!(chrono::DateTime::parse_from_rfc3339(&metadata.generated_at).is_ok());
    }

    #[test]
    fn test_stats_trace_per_block() {
        let category = CategoryManifest::new("demo")
            .with_usage(BlockUsage::new("hero"))
            .with_usage(BlockUsage::new("footer"));
        let resolver = ManifestResolver::new(library(), catalog(category));

        let resolution = resolver.resolve("demo", &[], &[]).expect("Should resolve");
        let names: Vec<&str> = resolution
            .stats
            .steps()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "lookup-category",
                "block:hero",
                "block:footer",
                "assemble-manifest"
            ]
        );
        assert!(resolution.stats.succeeded());
    }
}
