use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::PostError;
use crate::models::{Post, PostCreate, PostQuery, PostUpdate, PostWithCounts};

pub async fn create_post(
    pool: &PgPool,
    user_id: i64,
    data: &PostCreate,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, summary, ai_tools, purpose, method, results, tags, user_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.summary)
    .bind(&data.ai_tools)
    .bind(data.purpose.as_deref())
    .bind(data.method.as_deref())
    .bind(data.results.as_deref())
    .bind(data.tags.as_deref())
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// All posts, newest first. No pagination, no filtering.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT *
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// One user's posts with aggregated like/comment counts, newest first.
pub async fn list_posts_by_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<PostWithCounts>, sqlx::Error> {
    sqlx::query_as::<_, PostWithCounts>(
        r#"
        SELECT
            p.*,
            (SELECT count(*) FROM likes l WHERE l.post_id = p.id) AS likes_count,
            (SELECT count(*) FROM comments c WHERE c.post_id = p.id) AS comments_count
        FROM posts p
        WHERE p.user_id = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_post_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT *
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update_post(
    pool: &PgPool,
    id: i64,
    data: &PostUpdate,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET
            title = COALESCE($1, title),
            summary = COALESCE($2, summary),
            ai_tools = COALESCE($3, ai_tools),
            purpose = COALESCE($4, purpose),
            method = COALESCE($5, method),
            results = COALESCE($6, results),
            tags = COALESCE($7, tags),
            updated_at = now()
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(data.summary.as_deref())
    .bind(data.ai_tools.as_deref())
    .bind(data.purpose.as_deref())
    .bind(data.method.as_deref())
    .bind(data.results.as_deref())
    .bind(data.tags.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_post(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM posts WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Dynamic post listing used by the tag screen: filter, paginate and sort
/// over an arbitrary subset of `PostQuery` fields.
pub async fn query_posts(pool: &PgPool, data: &PostQuery) -> Result<Vec<Post>, PostError> {
    if data.is_empty() {
        return Err(PostError::InvalidRequest("No fields provided".into()));
    }

    if data.limit.is_some_and(|limit| limit < 0) {
        return Err(PostError::InvalidRequest(
            "Pagination 'limit' is negative integer".into(),
        ));
    }

    if data.offset.is_some_and(|offset| offset < 0) {
        return Err(PostError::InvalidRequest(
            "Pagination 'offset' is negative integer".into(),
        ));
    }

    let mut query_builder: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT * FROM posts WHERE ");
    let mut separated = query_builder.separated(" AND ");

    if let Some(user_id) = data.user_id {
        separated.push("user_id = ").push_bind_unseparated(user_id);
    }

    if let Some(tag) = &data.tag {
        // Tags are a comma-joined free-form string; substring match is the
        // strongest guarantee the storage format offers.
        separated
            .push("tags ILIKE ")
            .push_bind_unseparated(format!("%{}%", tag));
    }

    if let Some(created_at) = &data.created_at {
        separated
            .push("created_at >= ")
            .push_bind_unseparated(created_at);
    }

    if let Some(offset) = &data.offset {
        query_builder.push(" OFFSET ").push_bind(offset);
    }

    if let Some(limit) = &data.limit {
        query_builder.push(" LIMIT ").push_bind(limit);
    }

    if let Some(sort_params) = &data.sort_by {
        // Can not have order for offset, limit and sort_by
        if sort_params.len() > PostQuery::fields().len().saturating_sub(3) {
            return Err(PostError::InvalidRequest(format!(
                "Sort parameters exceed maximum limit of {}.",
                PostQuery::fields().len().saturating_sub(3)
            )));
        }

        let active_sorts: Vec<_> = PostQuery::fields()
            .iter()
            .zip(sort_params.iter())
            .filter_map(|(&col, &dir)| dir.map(|is_asc| (col, is_asc)))
            .collect();

        if active_sorts.is_empty() {
            query_builder.push(" ORDER BY created_at DESC ");
        } else {
            query_builder.push(" ORDER BY ");
            let mut separator = query_builder.separated(", ");

            for (col_name, is_asc) in active_sorts {
                let direction = if is_asc { " ASC" } else { " DESC" };
                separator.push(format!("{} {}", col_name, direction));
            }
        }
    } else {
        query_builder.push(" ORDER BY created_at DESC ");
    }

    let posts = query_builder
        .build_query_as::<Post>()
        .fetch_all(pool)
        .await?;

    Ok(posts)
}
