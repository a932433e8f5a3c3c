use thiserror::Error as ThisError;

///
/// StoreError
///
/// Structured failure surface for store mutations. Lookups that tolerate
/// absence (remove, clear) never produce one; only targeted updates do.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("key not found: {key}")]
    NotFound { key: String },
}

impl StoreError {
    /// Construct a not-found error from any displayable key.
    #[must_use]
    pub fn not_found(key: impl ToString) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

///
/// TimestampError
///
/// Failures parsing the RFC 3339 date strings carried by the review payload.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum TimestampError {
    #[error("timestamp parse error for '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp before epoch: '{input}'")]
    BeforeEpoch { input: String },
}
