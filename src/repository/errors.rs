use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by the data-access layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Failed to obtain a connection from the pool.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The storage engine rejected the statement (connectivity loss,
    /// constraint violation, conflicting write).
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// An update matched no row. Treated as a failure, never ignored.
    #[error("update affected no rows")]
    NotUpdated,
    /// A stored value could not be converted into its domain type.
    #[error("invalid stored value: {0}")]
    Conversion(#[from] TypeConstraintError),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
