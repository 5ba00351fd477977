use rust_decimal::Decimal;

/// Errors raised by catalog lookups and catalog construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// No asset is addressed by the identifier
    #[error("asset '{identifier}' not found")]
    NotFound { identifier: String },

    #[error("duplicate asset name '{0}'")]
    DuplicateName(String),

    #[error("duplicate asset slug '{0}'")]
    DuplicateSlug(String),

    /// Slugs are restricted to lowercase ASCII letters, digits and '-'
    #[error("slug '{0}' is not URL-safe")]
    InvalidSlug(String),

    #[error("asset '{name}' has a negative price ({usd})")]
    NegativePrice { name: String, usd: Decimal },

    #[error("asset '{0}' has no image path")]
    MissingImage(String),
}

impl CatalogError {
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
