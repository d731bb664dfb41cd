use std::str::FromStr;

use uuid::Uuid;

use crate::userdb::{User, UserStore};

use super::errors::RegistryError;

/// How bootstrap failures are treated at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BootstrapPolicy {
    /// Log the failure and start serving anyway. Requests that need the
    /// table fail individually until the store recovers.
    #[default]
    BestEffort,
    /// Abort startup on the first bootstrap failure
    FailFast,
}

impl FromStr for BootstrapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best-effort" => Ok(Self::BestEffort),
            "fail-fast" => Ok(Self::FailFast),
            other => Err(format!(
                "Unknown bootstrap policy: {other}. Supported policies are 'best-effort' and 'fail-fast'"
            )),
        }
    }
}

impl BootstrapPolicy {
    /// Read `REGISTRY_BOOTSTRAP_POLICY`, falling back to best-effort when
    /// the variable is unset or carries an unknown value.
    pub fn from_env() -> Self {
        match std::env::var("REGISTRY_BOOTSTRAP_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|err: String| {
                tracing::warn!("{}, falling back to best-effort", err);
                Self::BestEffort
            }),
            Err(_) => Self::BestEffort,
        }
    }
}

/// Handle for the record operations, cheap to clone and share across
/// request handlers. All state lives in the injected store.
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Prepare the backing table for serving: create it when missing and
    /// seed the default records into an empty one. Under
    /// [`BootstrapPolicy::BestEffort`] a failure is logged and startup
    /// continues with whatever state the store is in.
    pub async fn bootstrap(&self, policy: BootstrapPolicy) -> Result<(), RegistryError> {
        match (self.try_bootstrap().await, policy) {
            (Ok(()), _) => Ok(()),
            (Err(err), BootstrapPolicy::FailFast) => Err(err),
            (Err(err), BootstrapPolicy::BestEffort) => {
                tracing::error!("Bootstrap failed, serving requests anyway: {}", err);
                Ok(())
            }
        }
    }

    async fn try_bootstrap(&self) -> Result<(), RegistryError> {
        self.store.init().await?;

        if self.store.seed_if_empty().await? {
            tracing::info!("Seeded default users into empty table");
        }

        Ok(())
    }

    /// Create a record under a freshly generated id and return it
    pub async fn create_user(&self, name: String, email: String) -> Result<User, RegistryError> {
        let user = User::new(Uuid::new_v4().to_string(), name, email);

        let user = self.store.upsert_user(user).await?;
        tracing::debug!("Created user: {}", user.id);

        Ok(user)
    }

    /// Fetch every record, in store-defined order
    pub async fn list_users(&self) -> Result<Vec<User>, RegistryError> {
        Ok(self.store.get_all_users().await?)
    }

    /// Fetch one record by id
    pub async fn get_user(&self, id: &str) -> Result<User, RegistryError> {
        self.store.get_user(id).await?.ok_or_else(|| {
            RegistryError::NotFound {
                id: id.to_string(),
            }
            .log()
        })
    }

    /// Overwrite name and email of an existing record. A missing id is
    /// reported as not found, never turned into an insert.
    pub async fn update_user(
        &self,
        id: &str,
        name: String,
        email: String,
    ) -> Result<User, RegistryError> {
        self.store.update_user(id, &name, &email).await?.ok_or_else(|| {
            RegistryError::NotFound {
                id: id.to_string(),
            }
            .log()
        })
    }

    /// Delete a record by id. Succeeds whether or not the id existed.
    pub async fn delete_user(&self, id: &str) -> Result<(), RegistryError> {
        self.store.delete_user(id).await?;
        tracing::debug!("Deleted user: {}", id);

        Ok(())
    }
}
