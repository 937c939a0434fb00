use sqlx::PgPool;

use crate::models::{Profile, ProfileCreate, ProfileIden, ProfileSettings, ProfileUpdate};

/// Inserts a new profile. Returns `None` when the email is already taken.
pub async fn create_profile(
    pool: &PgPool,
    data: &ProfileCreate,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (username, email, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&data.password_hash)
    .fetch_optional(pool)
    .await
}

pub async fn get_profile(
    pool: &PgPool,
    iden: &ProfileIden,
) -> Result<Option<Profile>, sqlx::Error> {
    let (id, email): (Option<i64>, Option<String>) = match iden {
        ProfileIden::Id(id) => (Some(*id), None),
        ProfileIden::Email(email) => (None, Some(email.clone())),
    };

    sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles WHERE id = $1 OR email = $2"#)
        .bind(id)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn update_profile(
    pool: &PgPool,
    id: i64,
    data: &ProfileUpdate,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET
            username = COALESCE($1, username),
            bio = COALESCE($2, bio),
            avatar_url = COALESCE($3, avatar_url),
            updated_at = now()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(data.username.as_deref())
    .bind(data.bio.as_deref())
    .bind(data.avatar_url.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Persists the full settings payload from the settings screen.
pub async fn update_profile_settings(
    pool: &PgPool,
    id: i64,
    data: &ProfileSettings,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET
            username = $1,
            bio = $2,
            notification_likes = $3,
            notification_comments = $4,
            notification_follows = $5,
            email_frequency = $6,
            profile_visibility = $7,
            timezone = $8,
            language = $9,
            theme = $10,
            updated_at = now()
        WHERE id = $11
        RETURNING *
        "#,
    )
    .bind(&data.username)
    .bind(data.bio.as_deref())
    .bind(data.notification_likes)
    .bind(data.notification_comments)
    .bind(data.notification_follows)
    .bind(&data.email_frequency)
    .bind(&data.profile_visibility)
    .bind(&data.timezone)
    .bind(&data.language)
    .bind(&data.theme)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update_profile_email(
    pool: &PgPool,
    id: i64,
    email: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE profiles SET email = $1, updated_at = now() WHERE id = $2"#)
        .bind(email)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn update_profile_password(
    pool: &PgPool,
    id: i64,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE profiles SET password_hash = $1, updated_at = now() WHERE id = $2"#)
        .bind(password_hash)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Removes the profile row; posts, likes, comments and sessions cascade.
pub async fn delete_profile(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM profiles WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
