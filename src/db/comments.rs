use sqlx::PgPool;

use crate::models::{Comment, CommentCreate, CommentWithAuthor};

pub async fn create_comment(
    pool: &PgPool,
    data: &CommentCreate,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (user_id, post_id, content)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.post_id)
    .bind(&data.content)
    .fetch_one(pool)
    .await
}

/// Comments for a post with author display fields, oldest first.
pub async fn list_comments_for_post(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.*, pr.username, pr.avatar_url
        FROM comments c
        JOIN profiles pr ON pr.id = c.user_id
        WHERE c.post_id = $1
        ORDER BY c.created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

pub async fn count_comments(pool: &PgPool, post_id: i64) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(r#"SELECT count(*) FROM comments WHERE post_id = $1"#)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}
