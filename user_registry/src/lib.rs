//! # user-registry
//!
//! Core library for a small user record service: a storage gateway over a
//! SQL table (SQLite or PostgreSQL) plus the record operations built on it.
//!
//! ## Features
//!
//! - **Storage gateway**: table bootstrap, seeding, and the five passthrough
//!   operations (put, scan, get, update, delete) behind one handle
//! - **Record service**: id generation, not-found mapping, and startup
//!   bootstrap with a configurable failure policy
//! - **Pluggable backends**: SQLite and PostgreSQL selected by configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use user_registry::{BootstrapPolicy, StoreConfig, UserService, UserStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::from_env()?;
//!     let store = UserStore::connect(&config)?;
//!     let service = UserService::new(store);
//!     service.bootstrap(BootstrapPolicy::from_env()).await?;
//!
//!     let user = service.create_user("John Doe".into(), "john@example.com".into()).await?;
//!     println!("created {}", user.id);
//!     Ok(())
//! }
//! ```

mod service;
mod storage;
mod userdb;

#[cfg(test)]
mod test_utils;

pub use service::{BootstrapPolicy, RegistryError, UserService};
pub use storage::{StorageError, StoreConfig};
pub use userdb::{User, UserStore};
