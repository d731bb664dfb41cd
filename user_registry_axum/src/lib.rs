//! # user-registry-axum
//!
//! Axum integration for the [`user_registry`](user_registry) record service:
//! JSON endpoints for creating, listing, fetching, updating and deleting
//! user records, plus the request tracing wiring.
//!
//! ## Endpoints
//!
//! | Method | Path        | Success          | Failure                  |
//! |--------|-------------|------------------|--------------------------|
//! | POST   | /users      | 201, record      | 500                      |
//! | GET    | /users      | 200, record list | 500                      |
//! | GET    | /users/{id} | 200, record      | 404 / 500                |
//! | PUT    | /users/{id} | 200, record      | 404 / 500                |
//! | DELETE | /users/{id} | 200, message     | 500                      |
//!
//! Every failure body carries a single `error` field. The service handle is
//! injected as router state, so two routers never share store connections
//! unless given the same handle.
//!
//! ## Quick Start
//!
//! ```no_run
//! use user_registry_axum::{
//!     BootstrapPolicy, StoreConfig, UserService, UserStore, user_registry_router,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::from_env()?;
//!     let store = UserStore::connect(&config)?;
//!     let service = UserService::new(store);
//!     service.bootstrap(BootstrapPolicy::from_env()).await?;
//!
//!     let app = user_registry_router(service);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

mod error;
mod router;
mod user;

pub use router::{user_registry_router, user_registry_router_no_trace};

// Re-export the core types needed to stand up the router
pub use user_registry::{
    BootstrapPolicy, RegistryError, StoreConfig, User, UserService, UserStore,
};
