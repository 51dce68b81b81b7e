use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::{AppError, AppJson, AppPath, Result, parse_id},
    models::{User, UserPayload},
    services::user_service,
};

const ID_FIELD: &str = "id_usuario";

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = user_service::list_users(&state.db).await?;
    tracing::info!(count = users.len(), "Listed users");

    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> Result<Json<User>> {
    let user_id = parse_id(&raw_id, ID_FIELD)?;

    let user = user_service::get_user_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("usuario No encontrado".to_string()))?;

    Ok(Json(user))
}

pub async fn get_user_by_email(
    State(state): State<AppState>,
    AppPath(email): AppPath<String>,
) -> Result<Json<User>> {
    let user = user_service::get_user_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %email, "User not found by email");
            AppError::NotFound("Usuario no encontrado".to_string())
        })?;

    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserPayload>,
) -> Result<(StatusCode, Json<User>)> {
    let new_user = payload.into_new_user()?;

    let user = user_service::create_user(&state.db, &new_user).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
    AppJson(payload): AppJson<UserPayload>,
) -> Result<Json<User>> {
    let user_id = parse_id(&raw_id, ID_FIELD)?;
    let new_user = payload.into_new_user()?;

    let user = user_service::update_user(&state.db, user_id, &new_user)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;
    tracing::info!(user_id, "User updated");

    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> Result<Json<Value>> {
    let user_id = parse_id(&raw_id, ID_FIELD)?;

    if !user_service::delete_user(&state.db, user_id).await? {
        tracing::warn!(user_id, "Delete of unknown user");
        return Err(AppError::NotFound("Usuario no encontrado".to_string()));
    }
    tracing::info!(user_id, "User deleted");

    Ok(Json(json!({
        "message": "Usuario eliminado correctamente",
        "id_usuario": user_id
    })))
}
