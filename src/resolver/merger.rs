//! Override merging - layers placeholder specs and resolves template text
//!
//! Placeholder specs merge field-wise across four layers, lowest to highest
//! precedence: base block, variant, category (usage customizations, then the
//! category's per-block override), ad-hoc. Template resolution is a separate
//! concern: exactly one template string wins (variant, else category
//! override, else base), after which ad-hoc token substitutions run on the
//! text without touching the placeholder specification map.

use std::collections::HashMap;

use crate::catalog::{
    AdHocOverride, BlockDefinition, BlockUsage, CategoryOverride, PlaceholderPatch,
    PlaceholderSpec, Variant,
};

/// Applied-override labels recorded on resolved blocks
pub mod labels {
    pub const CATEGORY_PLACEHOLDERS: &str = "business-category-placeholders";
    pub const CATEGORY_TEMPLATE: &str = "business-category-template";
    pub const CUSTOM_PLACEHOLDERS: &str = "custom-placeholders";
    pub const CUSTOM_TEMPLATE: &str = "custom-template";

    /// Label for an applied variant
    pub fn variant(id: &str) -> String {
        format!("variant-{id}")
    }
}

/// Result of merging all override layers for one block
#[derive(Debug, Clone, PartialEq)]
pub struct MergedBlock {
    /// Final template text, after token substitutions
    pub template: String,
    /// Fully merged placeholder specs
    pub placeholders: HashMap<String, PlaceholderSpec>,
    /// Labels for every layer that actually fired, in application order
    pub applied_overrides: Vec<String>,
}

/// Merge every override layer for one block
///
/// `variant` must already be validated against the block definition; a
/// requested-but-missing variant is passed as `None`, which keeps the
/// category-level template override eligible (a bad variant reference must
/// not silently drop an unrelated category override).
pub fn merge_block(
    block: &BlockDefinition,
    variant: Option<&Variant>,
    usage: &BlockUsage,
    category_override: Option<&CategoryOverride>,
    ad_hoc: Option<&AdHocOverride>,
) -> MergedBlock {
    let mut placeholders = block.placeholders.clone();
    let mut applied = Vec::new();

    // Variant layer: template replaces wholesale, placeholder patches apply
    // before category overrides so category customization still wins.
    let mut template = block.base_template.clone();
    if let Some(variant) = variant {
        apply_patches(&mut placeholders, &variant.placeholder_overrides);
        template = variant.template.clone();
        applied.push(labels::variant(&variant.id));
    }

    // Category layer: usage customizations are convenience default values,
    // applied before the category's explicit per-block patches.
    for (name, value) in &usage.customizations {
        let patch = PlaceholderPatch::default_value(value.clone());
        match placeholders.get_mut(name) {
            Some(spec) => patch.apply(spec),
            None => {
                placeholders.insert(name.clone(), patch.into_spec());
            }
        }
    }

    if let Some(category_override) = category_override {
        if let Some(patches) = &category_override.placeholders {
            if !patches.is_empty() {
                apply_patches(&mut placeholders, patches);
                applied.push(labels::CATEGORY_PLACEHOLDERS.to_string());
            }
        }

        // The category's literal template only yields to a variant template
        // that was actually applied, not one that was merely requested.
        if variant.is_none() {
            if let Some(category_template) = &category_override.template {
                template = category_template.clone();
                applied.push(labels::CATEGORY_TEMPLATE.to_string());
            }
        }
    }

    // Ad-hoc layer: highest precedence for placeholder specs; template
    // overrides are exact token substitutions on the winning template text.
    if let Some(ad_hoc) = ad_hoc {
        if !ad_hoc.placeholder_overrides.is_empty() {
            apply_patches(&mut placeholders, &ad_hoc.placeholder_overrides);
            applied.push(labels::CUSTOM_PLACEHOLDERS.to_string());
        }

        if !ad_hoc.template_overrides.is_empty() {
            for (token, value) in &ad_hoc.template_overrides {
                template = template.replace(&format!("{{{token}}}"), value);
            }
            applied.push(labels::CUSTOM_TEMPLATE.to_string());
        }
    }

    MergedBlock {
        template,
        placeholders,
        applied_overrides: applied,
    }
}

/// Apply a patch map onto a spec map; unknown names create fresh specs
fn apply_patches(
    placeholders: &mut HashMap<String, PlaceholderSpec>,
    patches: &HashMap<String, PlaceholderPatch>,
) {
    for (name, patch) in patches {
        match placeholders.get_mut(name) {
            Some(spec) => patch.apply(spec),
            None => {
                placeholders.insert(name.clone(), patch.into_spec());
            }
        }
    }
}
