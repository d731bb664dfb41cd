use thiserror::Error;

/// Failure classes reported by the storage gateway.
///
/// The split matters to callers: `Unavailable` means the store could not be
/// reached at all, `Rejected` means the store answered and refused the
/// request. Both surface as internal errors at the HTTP boundary.
#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Rejected(String),

    #[error("Store configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Unavailable(err.to_string()),
            _ => Self::Rejected(err.to_string()),
        }
    }
}
