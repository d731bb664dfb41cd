//! Error types for the record service

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during record service operations
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No record exists under the requested id
    #[error("User not found: {id}")]
    NotFound { id: String },

    /// The storage gateway failed the underlying operation
    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl RegistryError {
    /// Log the error and return self
    ///
    /// Logs with a level matching the error's weight and returns self,
    /// allowing for method chaining at the site that creates the error.
    /// A missing record is part of normal operation and logs at debug,
    /// store failures log at error.
    pub fn log(self) -> Self {
        match &self {
            Self::NotFound { id } => tracing::debug!("User not found: {}", id),
            Self::Storage(err) => tracing::error!("Storage error: {}", err),
        }
        self
    }

    /// Whether this error reports a missing record rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Custom From implementation that automatically logs errors

impl From<StorageError> for RegistryError {
    fn from(err: StorageError) -> Self {
        let error = Self::Storage(err);
        tracing::error!("{}", error);
        error
    }
}
