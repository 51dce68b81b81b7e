use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::{AppError, AppPath, Result, parse_id},
    models::{DEMO_CATALOG, Product, ProductSummary, StaticProduct},
    services::product_service,
};

pub async fn list_demo_products() -> Json<[StaticProduct; 10]> {
    Json(DEMO_CATALOG)
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductSummary>>> {
    let products = product_service::list_summaries(&state.db).await?;
    tracing::info!(count = products.len(), "Listed products");

    Ok(Json(products))
}

pub async fn list_products_with_id(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_service::list_products(&state.db).await?;
    tracing::info!(count = products.len(), "Listed products with id");

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> Result<Json<Product>> {
    let product_id = parse_id(&raw_id, "id_producto")?;

    let product = product_service::get_product_by_id(&state.db, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("producto No encontrado".to_string()))?;

    Ok(Json(product))
}

pub async fn vote_product(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> Result<Json<Value>> {
    let vote = product_service::vote_by_name(&state.db, &name)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound(_)) {
                tracing::warn!(product = %name, "Vote for unknown product");
            }
        })?;

    tracing::info!(
        product = %name,
        product_id = vote.product_id,
        vote_id = vote.id,
        "Vote recorded"
    );

    Ok(Json(json!({ "ok": true })))
}
