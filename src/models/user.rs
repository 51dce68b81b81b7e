use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::error::{AppError, Result};

// Structural check only: something@something.tld without whitespace
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(rename = "id_usuario")]
    #[sqlx(rename = "id_usuario")]
    pub id: i32,
    #[serde(rename = "nombres")]
    #[sqlx(rename = "nombres")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    #[sqlx(rename = "apellidos")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    #[sqlx(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "creado_en")]
    #[sqlx(rename = "creado_en")]
    pub created_at: DateTime<Utc>,
}

// Create / full-update request body. Every field is required on both.
#[derive(Debug, Default, Validate, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "nombres")]
    #[validate(
        required(message = "es obligatorio"),
        length(min = 1, max = 50, message = "debe tener entre 1 y 50 caracteres")
    )]
    pub first_name: Option<String>,
    #[serde(rename = "apellidos")]
    #[validate(
        required(message = "es obligatorio"),
        length(min = 1, max = 50, message = "debe tener entre 1 y 50 caracteres")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "es obligatorio"),
        length(max = 80, message = "no puede superar 80 caracteres"),
        custom(function = "validate_email_shape")
    )]
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    #[validate(
        required(message = "es obligatorio"),
        length(min = 1, max = 30, message = "debe tener entre 1 y 30 caracteres")
    )]
    pub phone: Option<String>,
}

/// Fields of a user after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl UserPayload {
    pub fn into_new_user(self) -> Result<NewUser> {
        self.validate()?;

        match (self.first_name, self.last_name, self.email, self.phone) {
            (Some(first_name), Some(last_name), Some(email), Some(phone)) => Ok(NewUser {
                first_name,
                last_name,
                email,
                phone,
            }),
            _ => Err(AppError::Validation("Datos inválidos".to_string())),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

fn validate_email_shape(email: &str) -> std::result::Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("formato inválido".into()))
    }
}
