use thiserror::Error;

/// Errors raised by repository operations.
///
/// A lookup that finds nothing is not an error; see
/// [`CrudRepository::find_by_id`](crate::CrudRepository::find_by_id).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The stored version moved on since the entity was read.
    #[error("version conflict on {id}: expected {expected}, found {found}")]
    VersionConflict {
        id: String,
        expected: i64,
        found: i64,
    },

    #[error("cannot sort by unknown property '{0}'")]
    InvalidSort(String),

    #[error("invalid page request: {0}")]
    InvalidPage(String),

    /// Backend failure.
    #[error("storage error: {0}")]
    Storage(String),
}
