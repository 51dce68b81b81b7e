use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{ANONYMOUS_VOTER_ID, Product, ProductSummary, VoteRecord},
};

pub async fn list_summaries(db: &PgPool) -> Result<Vec<ProductSummary>> {
    let products = sqlx::query_as::<_, ProductSummary>(
        "SELECT nombre, foto, votacion FROM productos ORDER BY id_producto",
    )
    .fetch_all(db)
    .await?;

    Ok(products)
}

pub async fn list_products(db: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id_producto, nombre, foto, votacion FROM productos ORDER BY id_producto",
    )
    .fetch_all(db)
    .await?;

    Ok(products)
}

pub async fn get_product_by_id(db: &PgPool, product_id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id_producto, nombre, foto, votacion FROM productos WHERE id_producto = $1",
    )
    .bind(product_id)
    .fetch_optional(db)
    .await?;

    Ok(product)
}

/// Records an anonymous vote for the product called `name`.
///
/// The counter increment and the ledger append share one transaction: either
/// both are visible after commit or neither is. The increment is a single
/// `votacion = votacion + 1` statement, so concurrent votes never lose updates.
pub async fn vote_by_name(db: &PgPool, name: &str) -> Result<VoteRecord> {
    let mut tx = db.begin().await?;

    let product_id: Option<i32> = sqlx::query_scalar(
        r#"
        UPDATE productos
        SET votacion = votacion + 1
        WHERE nombre = $1
        RETURNING id_producto
        "#,
    )
    .bind(name)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(product_id) = product_id else {
        tx.rollback().await?;
        return Err(AppError::NotFound("producto No encontrado".to_string()));
    };

    let vote = sqlx::query_as::<_, VoteRecord>(
        r#"
        INSERT INTO detalle_votos (id_producto, fecha_voto, id_votante)
        VALUES ($1, $2, $3)
        RETURNING id_voto, id_producto, id_votante, fecha_voto
        "#,
    )
    .bind(product_id)
    .bind(chrono::Utc::now())
    .bind(ANONYMOUS_VOTER_ID)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(vote)
}
