//! Shared helpers for tests that need a live store

use uuid::Uuid;

use crate::storage::StoreConfig;
use crate::userdb::UserStore;

/// Build a gateway over a private in-memory SQLite database. The unique
/// name plus shared cache keeps one database alive across the pool's
/// connections while isolating it from every other test.
pub(crate) fn memory_store() -> UserStore {
    let config = StoreConfig {
        store_type: "sqlite".to_string(),
        url: format!(
            "sqlite:file:testdb_{}?mode=memory&cache=shared",
            Uuid::new_v4().simple()
        ),
        table_prefix: "reg_".to_string(),
    };

    UserStore::connect(&config).expect("in-memory store should always connect")
}
