use sqlx::PgPool;

use crate::{error::Result, models::VoteRecord};

/// Appends one ledger row. The product counter is left untouched; counted
/// votes go through `product_service::vote_by_name`.
pub async fn record_vote(db: &PgPool, product_id: i32, voter_id: i32) -> Result<VoteRecord> {
    let vote = sqlx::query_as::<_, VoteRecord>(
        r#"
        INSERT INTO detalle_votos (id_producto, fecha_voto, id_votante)
        VALUES ($1, $2, $3)
        RETURNING id_voto, id_producto, id_votante, fecha_voto
        "#,
    )
    .bind(product_id)
    .bind(chrono::Utc::now())
    .bind(voter_id)
    .fetch_one(db)
    .await?;

    Ok(vote)
}

pub async fn list_votes_by_voter(db: &PgPool, voter_id: i32) -> Result<Vec<VoteRecord>> {
    let votes = sqlx::query_as::<_, VoteRecord>(
        r#"
        SELECT id_voto, id_producto, id_votante, fecha_voto
        FROM detalle_votos
        WHERE id_votante = $1
        ORDER BY fecha_voto DESC, id_voto DESC
        "#,
    )
    .bind(voter_id)
    .fetch_all(db)
    .await?;

    Ok(votes)
}
