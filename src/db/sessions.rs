use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Profile, Session};

pub async fn create_session(pool: &PgPool, profile_id: i64) -> Result<Session, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (token, profile_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(profile_id)
    .fetch_one(pool)
    .await
}

/// Resolves a session token to its profile, or `None` for a stale token.
pub async fn get_session_profile(
    pool: &PgPool,
    token: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT pr.*
        FROM sessions s
        JOIN profiles pr ON pr.id = s.profile_id
        WHERE s.token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

pub async fn delete_session(pool: &PgPool, token: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM sessions WHERE token = $1"#)
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}
