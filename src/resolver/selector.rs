//! Variant selection - decides which visual variant a block resolves to
//!
//! Selection follows a strict priority order: an explicit ad-hoc request
//! always wins, then the category's variant pool (style match, random pick,
//! declared default, in that order), then the usage's statically declared
//! variant, and finally no variant at all. The random path is a deliberate
//! product feature (visual variety across repeated generations) and is
//! isolated behind [`SelectionStrategy`] so tests can substitute a
//! deterministic stub.

use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::catalog::{AdHocOverride, BlockUsage, VariantPool};

/// Pluggable source of random variant picks
pub trait SelectionStrategy: Send + Sync + std::fmt::Debug {
    /// Pick one candidate, or `None` when the slice is empty
    fn choose<'a>(&self, candidates: &'a [String]) -> Option<&'a str>;
}

/// Default strategy: uniform pick from a thread-local RNG
///
/// Intentionally not seedable; repeated resolutions of the same category are
/// expected to vary.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformRandom;

impl SelectionStrategy for UniformRandom {
    fn choose<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates.choose(&mut rand::thread_rng()).map(|s| s.as_str())
    }
}

/// Which selection branch fired, recorded in the processing trace
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantDecision {
    /// Caller requested the variant explicitly
    AdHocOverride,
    /// A pool member's style tags matched the request keywords
    StyleMatch { score: usize },
    /// Uniform random pick from the pool
    RandomPool,
    /// The pool's declared default
    PoolDefault,
    /// The usage's statically declared variant
    UsageDeclared,
    /// No variant applies; the base template is used
    BaseTemplate,
}

/// Outcome of one selection: the chosen variant id and the branch that chose it
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSelection {
    pub variant_id: Option<String>,
    pub decision: VariantDecision,
}

/// Decide which variant id, if any, applies to one block usage
///
/// Pure apart from the RNG call on the random-pool branch. Never validates
/// the chosen id against the block definition; that check (and its non-fatal
/// fallback) belongs to the caller.
pub fn select_variant(
    usage: &BlockUsage,
    pool: Option<&VariantPool>,
    ad_hoc: Option<&AdHocOverride>,
    keywords: &[String],
    strategy: &dyn SelectionStrategy,
) -> VariantSelection {
    // 1. Explicit caller request always wins
    if let Some(variant_id) = ad_hoc.and_then(|o| o.variant_id.as_deref()) {
        debug!(block = %usage.block_id, variant = %variant_id, "ad-hoc variant request");
        return VariantSelection {
            variant_id: Some(variant_id.to_string()),
            decision: VariantDecision::AdHocOverride,
        };
    }

    // 2. Category variant pool
    if let Some(pool) = pool {
        // 2a. Style-based match, only when the caller gave a style signal.
        // A style winner short-circuits random selection.
        if !keywords.is_empty() {
            if let Some((variant_id, score)) = best_style_match(pool, keywords) {
                debug!(
                    block = %usage.block_id,
                    variant = %variant_id,
                    score,
                    "style-based variant match"
                );
                return VariantSelection {
                    variant_id: Some(variant_id.to_string()),
                    decision: VariantDecision::StyleMatch { score },
                };
            }
        }

        // 2b. Uniform random pick
        if pool.random_selection {
            if let Some(variant_id) = strategy.choose(&pool.allowed_variants) {
                debug!(block = %usage.block_id, variant = %variant_id, "random variant pick");
                return VariantSelection {
                    variant_id: Some(variant_id.to_string()),
                    decision: VariantDecision::RandomPool,
                };
            }
        }

        // 2c. Pool default
        if let Some(variant_id) = &pool.default_variant {
            return VariantSelection {
                variant_id: Some(variant_id.clone()),
                decision: VariantDecision::PoolDefault,
            };
        }

        warn!(
            block = %usage.block_id,
            "variant pool produced no selection (empty pool or missing default)"
        );
    }

    // 3. Statically declared variant on the usage
    if let Some(variant_id) = &usage.variant_id {
        return VariantSelection {
            variant_id: Some(variant_id.clone()),
            decision: VariantDecision::UsageDeclared,
        };
    }

    // 4. Base template
    VariantSelection {
        variant_id: None,
        decision: VariantDecision::BaseTemplate,
    }
}

/// Minimum keyword/tag intersection for a style match to count
const STYLE_MATCH_THRESHOLD: usize = 1;

/// Score pool members against the keyword list; highest score wins, ties
/// break on `allowed_variants` declaration order
fn best_style_match<'a>(pool: &'a VariantPool, keywords: &[String]) -> Option<(&'a str, usize)> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut best: Option<(&str, usize)> = None;
    for variant_id in &pool.allowed_variants {
        let Some(constraints) = pool.constraints.get(variant_id) else {
            continue;
        };

        let score = keywords
            .iter()
            .filter(|keyword| {
                constraints.tone.iter().any(|t| t.to_lowercase() == **keyword)
                    || constraints
                        .business_type
                        .iter()
                        .any(|b| b.to_lowercase() == **keyword)
            })
            .count();

        if score >= STYLE_MATCH_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
            best = Some((variant_id, score));
        }
    }
    best
}
