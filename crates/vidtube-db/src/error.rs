//! Store error types

/// Failure while committing a unit of work.
///
/// Commit failures are first-class outcomes: `save()` returns them to the
/// caller and the committed tables are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("duplicate key {key} in table {table}")]
    DuplicateKey { table: &'static str, key: i32 },

    #[error("row {key} missing from table {table}")]
    MissingRow { table: &'static str, key: i32 },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, CommitError>;
