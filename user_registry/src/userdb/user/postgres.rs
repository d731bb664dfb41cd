use crate::storage::StorageError;
use crate::userdb::types::User;
use sqlx::{Pool, Postgres};

// PostgreSQL implementations
pub(super) async fn create_table_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
) -> Result<(), StorageError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
        table_name
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn count_users_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
) -> Result<i64, StorageError> {
    sqlx::query_scalar::<_, i64>(&format!(
        r#"
        SELECT COUNT(*) FROM {}
        "#,
        table_name
    ))
    .fetch_one(pool)
    .await
    .map_err(Into::into)
}

pub(super) async fn get_all_users_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
) -> Result<Vec<User>, StorageError> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {}
        "#,
        table_name
    ))
    .fetch_all(pool)
    .await
    .map_err(Into::into)
}

pub(super) async fn get_user_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
) -> Result<Option<User>, StorageError> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {} WHERE id = $1
        "#,
        table_name
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(Into::into)
}

pub(super) async fn upsert_user_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    user: User,
) -> Result<User, StorageError> {
    // Upsert user with a single query
    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, name, email)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            email = excluded.email
        "#,
        table_name
    ))
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .execute(pool)
    .await?;

    // Return stored user
    Ok(user)
}

pub(super) async fn update_user_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
    name: &str,
    email: &str,
) -> Result<Option<User>, StorageError> {
    // Single query, so a missing id costs no extra round trip
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE {} SET name = $1, email = $2 WHERE id = $3 RETURNING *
        "#,
        table_name
    ))
    .bind(name)
    .bind(email)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(Into::into)
}

pub(super) async fn delete_user_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
) -> Result<(), StorageError> {
    sqlx::query(&format!(
        r#"
        DELETE FROM {} WHERE id = $1
        "#,
        table_name
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
