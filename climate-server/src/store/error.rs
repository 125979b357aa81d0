//! Data access error types.

/// Errors that can occur when reading from the climate database.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be reached or the query failed
    #[error("data unavailable: {0}")]
    DataUnavailable(#[from] sqlx::Error),

    /// A stored date is not in `YYYY-MM-DD` form
    #[error("malformed date in dataset: {value}")]
    MalformedDate { value: String },
}
