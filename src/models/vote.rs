use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, Result};

/// Voter id recorded for votes cast from the public front end, which carry
/// no user identity.
pub const ANONYMOUS_VOTER_ID: i32 = 0;

// One row of the append-only vote ledger
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VoteRecord {
    #[serde(rename = "id_voto")]
    #[sqlx(rename = "id_voto")]
    pub id: i32,
    #[serde(rename = "id_producto")]
    #[sqlx(rename = "id_producto")]
    pub product_id: i32,
    #[serde(rename = "id_votante")]
    #[sqlx(rename = "id_votante")]
    pub voter_id: i32,
    #[serde(rename = "fecha_voto")]
    #[sqlx(rename = "fecha_voto")]
    pub voted_at: DateTime<Utc>,
}

// Vote registration request
#[derive(Debug, Default, Deserialize)]
pub struct VotePayload {
    #[serde(rename = "id_producto")]
    pub product_id: Option<i32>,
    #[serde(rename = "id_votante")]
    pub voter_id: Option<i32>,
}

impl VotePayload {
    /// Returns `(product_id, voter_id)` once both are present and positive.
    pub fn into_ids(self) -> Result<(i32, i32)> {
        match (self.product_id, self.voter_id) {
            (Some(product_id), Some(voter_id)) if product_id > 0 && voter_id > 0 => {
                Ok((product_id, voter_id))
            }
            _ => Err(AppError::BadRequest("Datos incompletos".to_string())),
        }
    }
}
