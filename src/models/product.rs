use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    #[serde(rename = "id_producto")]
    #[sqlx(rename = "id_producto")]
    pub id: i32,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "foto")]
    #[sqlx(rename = "foto")]
    pub photo: String,
    #[serde(rename = "votacion")]
    #[sqlx(rename = "votacion")]
    pub vote_count: i32,
}

// Product listing without the surrogate key
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductSummary {
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "foto")]
    #[sqlx(rename = "foto")]
    pub photo: String,
    #[serde(rename = "votacion")]
    #[sqlx(rename = "votacion")]
    pub vote_count: i32,
}

/// Entry of the fixed demo catalog served without touching the store.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StaticProduct {
    #[serde(rename = "nombre")]
    pub name: &'static str,
    #[serde(rename = "foto")]
    pub photo: &'static str,
    #[serde(rename = "votacion")]
    pub vote_count: i32,
}

const fn demo(name: &'static str, photo: &'static str, vote_count: i32) -> StaticProduct {
    StaticProduct {
        name,
        photo,
        vote_count,
    }
}

pub const DEMO_CATALOG: [StaticProduct; 10] = [
    demo("Revitalift", "revitalift.avif", 120),
    demo("Elseve", "elseve.jpg", 98),
    demo("Infallible", "infallible.jfif", 150),
    demo("Elvive", "elvive.avif", 87),
    demo("True Match", "truematch.webp", 110),
    demo("Preference", "preference.jpg", 65),
    demo("Men Expert", "menexpert.jpg", 45),
    demo("Age Perfect", "ageperfect.webp", 72),
    demo("Casting Crème", "castingcreme.webp", 90),
    demo("Studio Line", "studioline.jpg", 30),
];
