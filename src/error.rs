use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuggestError {
    #[error("Catalog unavailable ({origin}): {reason}")]
    CatalogUnavailable { origin: String, reason: String },

    /// Reserved: every string, including the empty one, is currently a valid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Remote lookup failed: {0}")]
    Remote(String),
}

impl SuggestError {
    pub fn catalog_unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        SuggestError::CatalogUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}
