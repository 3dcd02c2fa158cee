//! Error types for manifest resolution

use thiserror::Error;

/// The single error type raised by manifest resolution
///
/// Resolution either returns a complete manifest or exactly one of these;
/// soft inconsistencies (bad variant references, empty pools) are logged and
/// recovered from, never raised.
#[derive(Debug, Error)]
pub enum ManifestResolutionError {
    /// The requested category id is not present in the catalog
    #[error("unknown category: {category_id}")]
    UnknownCategory { category_id: String },

    /// A required block failed to resolve
    #[error("failed to resolve block '{block_id}' in category '{category_id}': {message}")]
    BlockResolution {
        block_id: String,
        category_id: String,
        message: String,
    },
}

impl ManifestResolutionError {
    /// Create an unknown-category error
    pub fn unknown_category(category_id: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category_id: category_id.into(),
        }
    }

    /// Create a block resolution error with category context
    pub fn block(
        block_id: impl Into<String>,
        category_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::BlockResolution {
            block_id: block_id.into(),
            category_id: category_id.into(),
            message: message.into(),
        }
    }

    /// The category id the error occurred in
    pub fn category_id(&self) -> &str {
        match self {
            Self::UnknownCategory { category_id } => category_id,
            Self::BlockResolution { category_id, .. } => category_id,
        }
    }
}
