//! Data model for block definitions, category manifests and overrides
//!
//! All configuration types carry serde derives with camelCase field names so
//! catalog files and manifest output use the same wire names as the rest of
//! the generation pipeline (`baseTemplate`, `placeholderOverrides`, ...).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Content type of a placeholder field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderType {
    /// Short single-line text
    #[default]
    Text,
    /// Multi-line text content
    Textarea,
    /// Image URL or asset reference
    Image,
    /// Link target
    Url,
    /// Numeric value
    Number,
    /// List of text items
    List,
}

/// Specification of a single named placeholder in a block template
///
/// The placeholder's *value* is supplied later by the content-generation
/// stage; the resolver only decides which constraints apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderSpec {
    /// Content type of the field
    #[serde(rename = "type", default)]
    pub value_type: PlaceholderType,

    /// Whether content generation must supply a value
    #[serde(default)]
    pub required: bool,

    /// Maximum content length in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Minimum content length in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Closed set of allowed values
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,

    /// Value used when content generation supplies nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Human-readable hint for the content generator
    #[serde(default)]
    pub description: String,
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        Self {
            value_type: PlaceholderType::Text,
            required: false,
            max_length: None,
            min_length: None,
            allowed_values: None,
            default_value: None,
            description: String::new(),
        }
    }
}

impl PlaceholderSpec {
    /// Create a text placeholder with a description
    pub fn text(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Mark the placeholder as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the maximum content length
    pub fn with_max_length(mut self, max: u32) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the content type
    pub fn with_type(mut self, value_type: PlaceholderType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Set the default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// A partial placeholder spec: every field optional, applied field-wise
///
/// Applying a patch only touches the fields it sets, so a patch carrying
/// `required: true` alone leaves an existing `maxLength` intact. Application
/// is idempotent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<PlaceholderType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaceholderPatch {
    /// Patch that only sets a default value (used for usage customizations)
    pub fn default_value(value: impl Into<String>) -> Self {
        Self {
            default_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch that only sets `required`
    pub fn required(value: bool) -> Self {
        Self {
            required: Some(value),
            ..Self::default()
        }
    }

    /// Patch that only sets `maxLength`
    pub fn max_length(max: u32) -> Self {
        Self {
            max_length: Some(max),
            ..Self::default()
        }
    }

    /// Apply this patch onto an existing spec, field by field
    pub fn apply(&self, spec: &mut PlaceholderSpec) {
        if let Some(value_type) = self.value_type {
            spec.value_type = value_type;
        }
        if let Some(required) = self.required {
            spec.required = required;
        }
        if let Some(max_length) = self.max_length {
            spec.max_length = Some(max_length);
        }
        if let Some(min_length) = self.min_length {
            spec.min_length = Some(min_length);
        }
        if let Some(allowed_values) = &self.allowed_values {
            spec.allowed_values = Some(allowed_values.clone());
        }
        if let Some(default_value) = &self.default_value {
            spec.default_value = Some(default_value.clone());
        }
        if let Some(description) = &self.description {
            spec.description = description.clone();
        }
    }

    /// Build a spec from this patch alone, for names the base never declared
    pub fn into_spec(&self) -> PlaceholderSpec {
        let mut spec = PlaceholderSpec::default();
        self.apply(&mut spec);
        spec
    }
}

/// Alternate template + placeholder patches for a shared block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Variant identifier, unique within its block
    pub id: String,

    /// Template string replacing the block's base template wholesale
    pub template: String,

    /// Field-wise patches over the base placeholder specs
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub placeholder_overrides: HashMap<String, PlaceholderPatch>,
}

impl Variant {
    /// Create a variant with no placeholder overrides
    pub fn new(id: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            template: template.into(),
            placeholder_overrides: HashMap::new(),
        }
    }

    /// Add a placeholder override
    pub fn with_override(mut self, name: impl Into<String>, patch: PlaceholderPatch) -> Self {
        self.placeholder_overrides.insert(name.into(), patch);
        self
    }
}

/// Reusable page-section definition: base template, placeholder specs, variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDefinition {
    /// Block identifier, unique within the library
    pub id: String,

    /// Functional grouping of the block (header, content, footer, ...)
    #[serde(default)]
    pub category: String,

    /// Base template used when no variant applies
    pub base_template: String,

    /// Placeholder specifications keyed by name
    #[serde(default)]
    pub placeholders: HashMap<String, PlaceholderSpec>,

    /// Alternate visual variants
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
}

impl BlockDefinition {
    /// Create a block definition with no placeholders or variants
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        base_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            base_template: base_template.into(),
            placeholders: HashMap::new(),
            variants: Vec::new(),
        }
    }

    /// Add a placeholder spec
    pub fn with_placeholder(mut self, name: impl Into<String>, spec: PlaceholderSpec) -> Self {
        self.placeholders.insert(name.into(), spec);
        self
    }

    /// Add a variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Look up a variant by id
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Check whether a variant id exists on this block
    pub fn has_variant(&self, id: &str) -> bool {
        self.variant(id).is_some()
    }
}

/// One block slot in a category's page composition
///
/// Declaration order is significant: resolved blocks appear in the manifest
/// in the order their usages are declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockUsage {
    /// Id of the block definition in the library
    pub block_id: String,

    /// Required usages must resolve; optional ones are skipped entirely
    #[serde(default = "default_true")]
    pub required: bool,

    /// Statically declared variant, lowest-priority variant source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    /// Per-usage default values injected into the placeholder specs
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub customizations: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl BlockUsage {
    /// Create a required usage
    pub fn new(block_id: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            required: true,
            variant_id: None,
            customizations: HashMap::new(),
        }
    }

    /// Mark the usage as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Declare a static variant
    pub fn with_variant(mut self, variant_id: impl Into<String>) -> Self {
        self.variant_id = Some(variant_id.into());
        self
    }

    /// Add a customization value
    pub fn with_customization(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.customizations.insert(name.into(), value.into());
        self
    }
}

/// Style tags attached to one pool member, matched against request keywords
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConstraints {
    /// Business-type tags (e.g. "restaurant", "boutique")
    #[serde(default)]
    pub business_type: Vec<String>,

    /// Tone tags (e.g. "luxury", "casual")
    #[serde(default)]
    pub tone: Vec<String>,
}

/// Allowed variants for a block within a category, plus selection policy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPool {
    /// Pool members; selection never leaves this set
    #[serde(default)]
    pub allowed_variants: Vec<String>,

    /// Fallback when neither style match nor random selection fires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_variant: Option<String>,

    /// Pick uniformly at random when no style match wins
    #[serde(default)]
    pub random_selection: bool,

    /// Per-member style tags, keyed by variant id
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub constraints: HashMap<String, VariantConstraints>,
}

impl VariantPool {
    /// Create a pool from its member list
    pub fn new(allowed_variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed_variants: allowed_variants.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the default variant
    pub fn with_default(mut self, variant_id: impl Into<String>) -> Self {
        self.default_variant = Some(variant_id.into());
        self
    }

    /// Enable random selection
    pub fn random(mut self) -> Self {
        self.random_selection = true;
        self
    }

    /// Attach style tags to a pool member
    pub fn with_constraints(
        mut self,
        variant_id: impl Into<String>,
        constraints: VariantConstraints,
    ) -> Self {
        self.constraints.insert(variant_id.into(), constraints);
        self
    }

    /// Check pool membership
    pub fn allows(&self, variant_id: &str) -> bool {
        self.allowed_variants.iter().any(|v| v == variant_id)
    }
}

/// Category-level customization of one block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOverride {
    /// Placeholder patches applied above the variant layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<HashMap<String, PlaceholderPatch>>,

    /// Literal template replacing the base when no variant template applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Site-wide visual settings carried through to the renderer untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Theme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Color scheme token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,

    /// Typography pairing token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<String>,

    /// Section spacing token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
}

fn default_theme() -> String {
    "modern".to_string()
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            color_scheme: None,
            typography: None,
            spacing: None,
        }
    }
}

/// Declarative description of which blocks a business vertical uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryManifest {
    /// Category identifier, unique within the catalog
    pub id: String,

    /// Descriptive keywords for the vertical
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Ordered block slots
    #[serde(default)]
    pub block_usages: Vec<BlockUsage>,

    /// Site-wide settings passed through to the output manifest
    #[serde(default)]
    pub global_settings: GlobalSettings,

    /// Per-block customization, keyed by block id
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub overrides: HashMap<String, CategoryOverride>,

    /// Per-block variant pools, keyed by block id
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variant_pools: HashMap<String, VariantPool>,
}

impl CategoryManifest {
    /// Create an empty category manifest
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keywords: Vec::new(),
            block_usages: Vec::new(),
            global_settings: GlobalSettings::default(),
            overrides: HashMap::new(),
            variant_pools: HashMap::new(),
        }
    }

    /// Append a block usage (declaration order is preserved in output)
    pub fn with_usage(mut self, usage: BlockUsage) -> Self {
        self.block_usages.push(usage);
        self
    }

    /// Attach a variant pool to a block
    pub fn with_pool(mut self, block_id: impl Into<String>, pool: VariantPool) -> Self {
        self.variant_pools.insert(block_id.into(), pool);
        self
    }

    /// Attach a category-level override to a block
    pub fn with_override(
        mut self,
        block_id: impl Into<String>,
        over: CategoryOverride,
    ) -> Self {
        self.overrides.insert(block_id.into(), over);
        self
    }

    /// Set the descriptive keywords
    pub fn with_keywords(
        mut self,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Caller-supplied override, scoped to a single resolution call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdHocOverride {
    /// Block the override targets
    pub block_id: String,

    /// Explicit variant request, highest-priority variant source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    /// Exact `{token}` -> literal substitutions on the final template text
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub template_overrides: HashMap<String, String>,

    /// Placeholder patches applied above every other layer
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub placeholder_overrides: HashMap<String, PlaceholderPatch>,
}

impl AdHocOverride {
    /// Create an empty override for a block
    pub fn new(block_id: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            ..Self::default()
        }
    }

    /// Request an explicit variant
    pub fn with_variant(mut self, variant_id: impl Into<String>) -> Self {
        self.variant_id = Some(variant_id.into());
        self
    }

    /// Add a template token substitution
    pub fn with_template_override(
        mut self,
        token: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.template_overrides.insert(token.into(), value.into());
        self
    }

    /// Add a placeholder patch
    pub fn with_placeholder_override(
        mut self,
        name: impl Into<String>,
        patch: PlaceholderPatch,
    ) -> Self {
        self.placeholder_overrides.insert(name.into(), patch);
        self
    }
}

/// Per-block provenance recorded in the output manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    /// Id of the block definition this block was resolved from
    pub source_block_id: String,

    /// Variant whose template was applied, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    /// Number of placeholder specs after merging
    pub placeholder_count: usize,

    /// Length of the final template text in bytes
    pub template_length: usize,
}

/// Fully resolved block, ready for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcreteBlock {
    /// Block id (mirrors the usage's block id)
    pub id: String,

    /// Final template text
    pub template: String,

    /// Fully merged placeholder specs
    pub placeholders: HashMap<String, PlaceholderSpec>,

    /// Human-readable labels for every override layer that fired
    pub applied_overrides: Vec<String>,

    /// Provenance metadata
    pub metadata: BlockMetadata,
}

/// Manifest-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    /// Manifest schema version
    pub version: String,

    /// RFC 3339 generation timestamp
    pub generated_at: String,

    /// Number of resolved blocks
    pub total_blocks: usize,

    /// Deduplicated union of every block's applied overrides, first-seen order
    pub applied_overrides: Vec<String>,
}

/// The fully resolved, renderer-ready output of one resolution call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcreteManifest {
    /// Id of the resolved category
    pub category: String,

    /// Resolved blocks in usage declaration order
    pub blocks: Vec<ConcreteBlock>,

    /// Category's global settings, passed through
    pub global_settings: GlobalSettings,

    /// Manifest-level metadata
    pub metadata: ManifestMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_patch_applies_field_wise() {
        let mut spec = PlaceholderSpec::text("headline").required().with_max_length(80);
        PlaceholderPatch::required(false).apply(&mut spec);

        // Only `required` changed; maxLength survives
        assert!(!spec.required);
        assert_eq!(spec.max_length, Some(80));
        assert_eq!(spec.description, "headline");
    }

    #[test]
    fn test_patch_is_idempotent() {
        let patch = PlaceholderPatch {
            required: Some(true),
            max_length: Some(40),
            description: Some("tagline".to_string()),
            ..PlaceholderPatch::default()
        };

        let mut once = PlaceholderSpec::default();
        patch.apply(&mut once);
        let mut twice = once.clone();
        patch.apply(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_patch_scalar_replaces_outright() {
        let mut spec = PlaceholderSpec::default().with_default("old");
        PlaceholderPatch::default_value("new").apply(&mut spec);
        assert_eq!(spec.default_value.as_deref(), Some("new"));
    }

    #[test]
    fn test_patch_into_spec_for_unknown_name() {
        let spec = PlaceholderPatch::max_length(120).into_spec();
        assert_eq!(spec.value_type, PlaceholderType::Text);
        assert!(!spec.required);
        assert_eq!(spec.max_length, Some(120));
    }

    #[test]
    fn test_block_variant_lookup() {
        let block = BlockDefinition::new("hero", "header", "<Hero />")
            .with_variant(Variant::new("hero-stats", "<HeroStats />"));

        assert!(block.has_variant("hero-stats"));
        assert!(!block.has_variant("hero-video"));
        assert_eq!(block.variant("hero-stats").unwrap().template, "<HeroStats />");
    }

    #[test]
    fn test_usage_defaults_to_required() {
        let usage: BlockUsage = serde_json::from_str(r#"{"blockId": "hero"}"#).unwrap();
        assert!(usage.required);
        assert!(usage.variant_id.is_none());
    }

    #[test]
    fn test_pool_membership() {
        let pool = VariantPool::new(["a", "b"]).with_default("a");
        assert!(pool.allows("a"));
        assert!(!pool.allows("c"));
    }

    #[test]
    fn test_camel_case_wire_names() {
        let spec = PlaceholderSpec::text("name").required().with_max_length(30);
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"maxLength\":30"));
        assert!(json.contains("\"type\":\"text\""));

        let over: AdHocOverride =
            serde_json::from_str(r#"{"blockId": "hero", "variantId": "hero-split"}"#).unwrap();
        assert_eq!(over.block_id, "hero");
        assert_eq!(over.variant_id.as_deref(), Some("hero-split"));
    }
}
