//! Record service module
//!
//! High-level user record operations built on the storage gateway. This is
//! the layer HTTP handlers talk to: it generates ids, distinguishes missing
//! records from store failures, and owns the startup bootstrap sequence.
//!
//! The module is divided into two submodules:
//! - `errors`: Error types specific to record service operations
//! - `user`: The service handle, record operations and bootstrap

mod errors;
mod user;

pub use errors::RegistryError;
pub use user::{BootstrapPolicy, UserService};
