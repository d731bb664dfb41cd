use axum::{
    extract::{Json as ExtractJson, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};

use user_registry::{User, UserService};

use crate::error::IntoResponseError;

/// Request payload carrying the writable record fields, shared by the
/// create and update endpoints
#[derive(Deserialize)]
pub(crate) struct UserPayload {
    name: String,
    email: String,
}

/// Create a record under a fresh id and return it with 201
pub(crate) async fn create_user(
    State(service): State<UserService>,
    ExtractJson(payload): ExtractJson<UserPayload>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<Value>)> {
    let user = service
        .create_user(payload.name, payload.email)
        .await
        .into_response_error("Error creating user")?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Return every record in the table
pub(crate) async fn list_users(
    State(service): State<UserService>,
) -> Result<Json<Vec<User>>, (StatusCode, Json<Value>)> {
    let users = service
        .list_users()
        .await
        .into_response_error("Error fetching users")?;

    Ok(Json(users))
}

/// Return the record with the given id, or 404
pub(crate) async fn get_user(
    State(service): State<UserService>,
    Path(id): Path<String>,
) -> Result<Json<User>, (StatusCode, Json<Value>)> {
    let user = service
        .get_user(&id)
        .await
        .into_response_error("Error fetching user")?;

    Ok(Json(user))
}

/// Overwrite the record with the given id and return the stored result,
/// or 404 when no such record exists
pub(crate) async fn update_user(
    State(service): State<UserService>,
    Path(id): Path<String>,
    ExtractJson(payload): ExtractJson<UserPayload>,
) -> Result<Json<User>, (StatusCode, Json<Value>)> {
    let user = service
        .update_user(&id, payload.name, payload.email)
        .await
        .into_response_error("Error updating user")?;

    Ok(Json(user))
}

/// Delete the record with the given id. Returns the fixed confirmation
/// message whether or not the id existed.
pub(crate) async fn delete_user(
    State(service): State<UserService>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    service
        .delete_user(&id)
        .await
        .into_response_error("Error deleting user")?;

    Ok(Json(json!({ "message": "User deleted successfully" })))
}
