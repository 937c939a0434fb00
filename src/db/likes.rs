use sqlx::PgPool;

use crate::models::Like;

/// Adds the like if absent, removes it if present. Returns whether the post
/// is liked by the user after the call.
pub async fn toggle_like(pool: &PgPool, user_id: i64, post_id: i64) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (user_id, post_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, post_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    if inserted.is_some() {
        return Ok(true);
    }

    sqlx::query(r#"DELETE FROM likes WHERE user_id = $1 AND post_id = $2"#)
        .bind(user_id)
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(false)
}

pub async fn has_liked(pool: &PgPool, user_id: i64, post_id: i64) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as(
        r#"SELECT EXISTS (SELECT 1 FROM likes WHERE user_id = $1 AND post_id = $2)"#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

pub async fn count_likes(pool: &PgPool, post_id: i64) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(r#"SELECT count(*) FROM likes WHERE post_id = $1"#)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}
