//! Store gateway errors.

use thiserror::Error;

/// Failure reported by a document collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sql(#[from] sqlx::Error),
}
