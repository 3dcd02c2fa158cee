//! The manifest resolution engine
//!
//! Three collaborating pieces, composed by [`ManifestResolver`]:
//! variant selection ([`select_variant`]) decides which visual variant a
//! block uses, override merging ([`merger::merge_block`]) layers placeholder
//! specs and picks the winning template, and [`ProcessingStats`] records a
//! call-scoped diagnostic trace.

mod engine;
pub mod merger;
mod selector;
mod stats;

pub use engine::{ManifestResolver, Resolution, MANIFEST_VERSION};
pub use merger::MergedBlock;
pub use selector::{select_variant, SelectionStrategy, UniformRandom, VariantDecision};
pub use stats::{ProcessingStats, StepStats, StepTimer};
