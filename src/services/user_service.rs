use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{NewUser, User},
};

const USER_COLUMNS: &str = "id_usuario, nombres, apellidos, email, telefono, creado_en";

pub async fn list_users(db: &PgPool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM cliente_usuario ORDER BY id_usuario DESC"
    ))
    .fetch_all(db)
    .await?;

    Ok(users)
}

pub async fn get_user_by_id(db: &PgPool, user_id: i32) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM cliente_usuario WHERE id_usuario = $1"
    ))
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

pub async fn get_user_by_email(db: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM cliente_usuario WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

pub async fn create_user(db: &PgPool, user: &NewUser) -> Result<User> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO cliente_usuario (nombres, apellidos, email, telefono)
        VALUES ($1, $2, $3, $4)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.phone)
    .fetch_one(db)
    .await
    .map_err(|e| AppError::from_write(e, "El email de este usuario ya existe"))
}

/// Replaces all four business fields. Returns `None` when no row has `user_id`.
pub async fn update_user(db: &PgPool, user_id: i32, user: &NewUser) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE cliente_usuario
        SET nombres = $1, apellidos = $2, email = $3, telefono = $4
        WHERE id_usuario = $5
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(user_id)
    .fetch_optional(db)
    .await
    .map_err(|e| AppError::from_write(e, "El email ya existe"))
}

/// Returns whether a row was deleted.
pub async fn delete_user(db: &PgPool, user_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM cliente_usuario WHERE id_usuario = $1")
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
