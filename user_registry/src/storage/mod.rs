mod config;
mod errors;
mod types;

pub use config::StoreConfig;
pub use errors::StorageError;
pub use types::DataStore;

pub(crate) use config::connect;
