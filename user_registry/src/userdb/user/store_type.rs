use std::sync::Arc;

use uuid::Uuid;

use crate::storage::{self, DataStore, StorageError, StoreConfig};
use crate::userdb::types::User;

use super::postgres::*;
use super::sqlite::*;

/// Records inserted into an empty table at bootstrap
const SEED_USERS: [(&str, &str); 2] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
];

/// Gateway to the users table. Holds the pool handle and the resolved table
/// name, so one connected store serves every request. Cloning is cheap.
#[derive(Clone)]
pub struct UserStore {
    store: Arc<dyn DataStore>,
    table: String,
}

impl UserStore {
    /// Build a store client for the configured backend. The pool connects
    /// lazily, so this succeeds even when the store is unreachable and the
    /// failure surfaces on the first operation instead.
    pub fn connect(config: &StoreConfig) -> Result<Self, StorageError> {
        let store = storage::connect(config)?;

        Ok(Self {
            store,
            table: config.users_table(),
        })
    }

    /// Create the users table if it does not exist yet
    pub async fn init(&self) -> Result<(), StorageError> {
        match (self.store.as_sqlite(), self.store.as_postgres()) {
            (Some(pool), _) => create_table_sqlite(pool, &self.table).await,
            (_, Some(pool)) => create_table_postgres(pool, &self.table).await,
            _ => Err(StorageError::Rejected(
                "Unsupported database type".to_string(),
            )),
        }
    }

    /// Insert the default records when the table is empty. Returns whether
    /// seeding happened. A non-empty table is left untouched, so restarts do
    /// not duplicate records.
    pub async fn seed_if_empty(&self) -> Result<bool, StorageError> {
        if self.count_users().await? > 0 {
            return Ok(false);
        }

        for (name, email) in SEED_USERS {
            let user = User::new(
                Uuid::new_v4().to_string(),
                name.to_string(),
                email.to_string(),
            );
            let user = self.upsert_user(user).await?;
            tracing::info!("User {} added successfully", user.name);
        }

        Ok(true)
    }

    /// Count the records in the table
    pub async fn count_users(&self) -> Result<i64, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            count_users_sqlite(pool, &self.table).await
        } else if let Some(pool) = self.store.as_postgres() {
            count_users_postgres(pool, &self.table).await
        } else {
            Err(StorageError::Rejected(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Fetch every record, in store-defined order
    pub async fn get_all_users(&self) -> Result<Vec<User>, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            get_all_users_sqlite(pool, &self.table).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_all_users_postgres(pool, &self.table).await
        } else {
            Err(StorageError::Rejected(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Get a user by their ID
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            get_user_sqlite(pool, &self.table, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_user_postgres(pool, &self.table, id).await
        } else {
            Err(StorageError::Rejected(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Create or replace a user under its id
    pub async fn upsert_user(&self, user: User) -> Result<User, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            upsert_user_sqlite(pool, &self.table, user).await
        } else if let Some(pool) = self.store.as_postgres() {
            upsert_user_postgres(pool, &self.table, user).await
        } else {
            Err(StorageError::Rejected(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Overwrite name and email of the record with this id, keeping the id.
    /// Returns the stored record, or `None` when no record matched.
    pub async fn update_user(
        &self,
        id: &str,
        name: &str,
        email: &str,
    ) -> Result<Option<User>, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            update_user_sqlite(pool, &self.table, id, name, email).await
        } else if let Some(pool) = self.store.as_postgres() {
            update_user_postgres(pool, &self.table, id, name, email).await
        } else {
            Err(StorageError::Rejected(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Delete the record with this id. Deleting an absent id is not an
    /// error, so the operation can be retried safely.
    pub async fn delete_user(&self, id: &str) -> Result<(), StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            delete_user_sqlite(pool, &self.table, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            delete_user_postgres(pool, &self.table, id).await
        } else {
            Err(StorageError::Rejected(
                "Unsupported database type".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::memory_store;

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let store = memory_store();
        store.init().await.unwrap();
        store.init().await.unwrap();

        assert_eq!(store.count_users().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_fills_empty_table_once() {
        let store = memory_store();
        store.init().await.unwrap();

        // First bootstrap seeds the default records
        assert!(store.seed_if_empty().await.unwrap());
        assert_eq!(store.count_users().await.unwrap(), 2);

        // A second bootstrap sees a non-empty table and does nothing
        assert!(!store.seed_if_empty().await.unwrap());
        assert_eq!(store.count_users().await.unwrap(), 2);

        let mut names: Vec<String> = store
            .get_all_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Jane Smith", "John Doe"]);
    }

    #[tokio::test]
    async fn test_seed_skips_partially_filled_table() {
        let store = memory_store();
        store.init().await.unwrap();

        let user = User::new(
            "existing".to_string(),
            "Existing User".to_string(),
            "existing@example.com".to_string(),
        );
        store.upsert_user(user).await.unwrap();

        // One record is enough to suppress seeding
        assert!(!store.seed_if_empty().await.unwrap());
        assert_eq!(store.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_then_get_returns_equal_record() {
        let store = memory_store();
        store.init().await.unwrap();

        let user = User::new(
            "user123".to_string(),
            "Test User".to_string(),
            "test@example.com".to_string(),
        );
        let stored = store.upsert_user(user.clone()).await.unwrap();
        assert_eq!(stored, user);

        let fetched = store.get_user("user123").await.unwrap();
        assert_eq!(fetched, Some(user));
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_record() {
        let store = memory_store();
        store.init().await.unwrap();

        let user = User::new(
            "user123".to_string(),
            "Old Name".to_string(),
            "old@example.com".to_string(),
        );
        store.upsert_user(user).await.unwrap();

        let replacement = User::new(
            "user123".to_string(),
            "New Name".to_string(),
            "new@example.com".to_string(),
        );
        store.upsert_user(replacement.clone()).await.unwrap();

        assert_eq!(store.count_users().await.unwrap(), 1);
        assert_eq!(store.get_user("user123").await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_none() {
        let store = memory_store();
        store.init().await.unwrap();

        assert_eq!(store.get_user("no-such-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let store = memory_store();
        store.init().await.unwrap();

        let user = User::new(
            "user123".to_string(),
            "Old Name".to_string(),
            "old@example.com".to_string(),
        );
        store.upsert_user(user).await.unwrap();

        let updated = store
            .update_user("user123", "New Name", "new@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, "user123");
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.email, "new@example.com");

        // The stored record matches what update returned
        assert_eq!(store.get_user("user123").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_none() {
        let store = memory_store();
        store.init().await.unwrap();

        let result = store
            .update_user("no-such-id", "Name", "email@example.com")
            .await
            .unwrap();
        assert_eq!(result, None);

        // No record was created as a side effect
        assert_eq!(store.count_users().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = memory_store();
        store.init().await.unwrap();

        let user = User::new(
            "user123".to_string(),
            "Test User".to_string(),
            "test@example.com".to_string(),
        );
        store.upsert_user(user).await.unwrap();

        store.delete_user("user123").await.unwrap();
        assert_eq!(store.get_user("user123").await.unwrap(), None);

        // Deleting again (or deleting an id that never existed) still succeeds
        store.delete_user("user123").await.unwrap();
        store.delete_user("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn test_operations_fail_without_init() {
        let store = memory_store();

        // The table was never created, so the store rejects the query
        let err = store.get_all_users().await.unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
    }
}
