mod common;

#[cfg(test)]
pub mod service_tests {
    use sqlx::PgPool;

    use super::common::*;

    use aix::common::*;
    use aix::db;
    use aix::models::*;
    use aix::services::cache::CacheKey;
    use aix::services::posts::PostService;

    fn sample_create() -> PostCreate {
        PostCreate {
            title: "Geminiで資料のたたき台作成".to_string(),
            summary: "企画書の初稿を生成AIに任せた".to_string(),
            ai_tools: "Gemini".to_string(),
            purpose: None,
            method: None,
            results: None,
            tags: Some("資料作成".to_string()),
        }
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_list_all_orders_desc_and_caches(pool: PgPool) {
        let service = PostService::new(pool);

        let posts = service.list_all().await.expect("Failed to list posts");
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        assert!(
            service.cache().contains(&CacheKey::Posts),
            "A successful list populates the cache entry"
        );
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_list_all_serves_stale_data_until_invalidated(pool: PgPool) {
        let service = PostService::new(pool.clone());

        let first = service.list_all().await.expect("Failed to list posts");
        assert_eq!(first.len(), 3);

        // A write that bypasses the service does not touch the cache key, so
        // the next read still sees the cached result set.
        db::create_post(&pool, 2, &sample_create())
            .await
            .expect("Failed to create post");

        let second = service.list_all().await.expect("Failed to list posts");
        assert_eq!(second.len(), 3, "Stale entry served until invalidation");

        service.cache().invalidate(&CacheKey::Posts);

        let third = service.list_all().await.expect("Failed to list posts");
        assert_eq!(third.len(), 4, "Invalidation forces a re-fetch");
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_create_inserts_once_with_numeric_session_id(pool: PgPool) {
        let service = PostService::new(pool.clone());

        // Prime the list entry so invalidation is observable.
        service.list_all().await.expect("Failed to list posts");

        let created = service
            .create("2", &sample_create())
            .await
            .expect("Failed to create post");

        assert_eq!(created.user_id, 2);
        assert!(
            !service.cache().contains(&CacheKey::Posts),
            "Create invalidates the list-all entry"
        );

        let posts = service.list_all().await.expect("Failed to list posts");
        assert_eq!(posts.len(), 4, "Exactly one row was inserted");
        assert_eq!(posts.first().map(|p| p.id), Some(created.id));
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_create_rejects_non_numeric_session_id(pool: PgPool) {
        let service = PostService::new(pool.clone());

        let result = service.create("usr_007", &sample_create()).await;

        assert!(
            matches!(&result, Err(PostError::InvalidUserId(raw)) if raw == "usr_007"),
            "Non-numeric identifier is a validation error, not a backend one"
        );

        let posts = db::list_posts(&pool).await.expect("Failed database query");
        assert_eq!(posts.len(), 3, "No insert was issued");
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_list_by_user_rejects_non_numeric_without_db_call(pool: PgPool) {
        let service = PostService::new(pool.clone());

        // With the pool closed, any issued query would surface as a
        // database error; the validation error proves none was issued.
        pool.close().await;

        let result = service.list_by_user("not-a-number").await;
        assert!(matches!(result, Err(PostError::InvalidUserId(_))));

        let result = service.list_by_user("1").await;
        assert!(
            matches!(result, Err(PostError::Database(_))),
            "A numeric identifier proceeds to the (closed) database"
        );
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_list_by_user_returns_counts(pool: PgPool) {
        let service = PostService::new(pool);

        let posts = service
            .list_by_user("1")
            .await
            .expect("Failed to list user posts");

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(posts[1].likes_count, 2);
        assert_eq!(posts[1].comments_count, 1);
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_user_posts_entry_survives_post_mutations(pool: PgPool) {
        let service = PostService::new(pool);

        service
            .list_by_user("1")
            .await
            .expect("Failed to list user posts");

        service
            .create("1", &sample_create())
            .await
            .expect("Failed to create post");

        // Post mutations invalidate the list-all and single-post entries
        // only; the per-user entry stays until its own key is invalidated.
        let posts = service
            .list_by_user("1")
            .await
            .expect("Failed to list user posts");
        assert_eq!(posts.len(), 2, "Per-user entry is served stale");
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_get_post_success_and_not_found(pool: PgPool) {
        let service = PostService::new(pool);

        let post = service.get(1).await.expect("Failed to get post");
        assert_eq!(post, get_seed_post_summary());
        assert!(service.cache().contains(&CacheKey::Post(1)));

        let missing = service.get(99).await;
        assert!(matches!(missing, Err(PostError::NotFound(99))));
        assert!(!service.cache().contains(&CacheKey::Post(99)));
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_update_invalidates_single_post_entry_only(pool: PgPool) {
        let service = PostService::new(pool);

        service.get(1).await.expect("Failed to get post");
        service.list_all().await.expect("Failed to list posts");

        let update = PostUpdate {
            title: Some("更新後のタイトル".to_string()),
            ..Default::default()
        };
        let updated = service.update(1, &update).await.expect("Failed to update");
        assert_eq!(updated.title, "更新後のタイトル");

        assert!(
            !service.cache().contains(&CacheKey::Post(1)),
            "Update invalidates the cached single-post entry"
        );
        assert!(
            service.cache().contains(&CacheKey::Posts),
            "The list-all entry is not touched by update"
        );

        let reloaded = service.get(1).await.expect("Failed to get post");
        assert_eq!(reloaded.title, "更新後のタイトル");
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_update_rejects_empty_field_set(pool: PgPool) {
        let service = PostService::new(pool);

        let result = service.update(1, &PostUpdate::default()).await;
        assert!(matches!(result, Err(PostError::InvalidRequest(_))));
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_delete_invalidates_list_so_next_read_refetches(pool: PgPool) {
        let service = PostService::new(pool);

        let before = service.list_all().await.expect("Failed to list posts");
        assert!(before.iter().any(|p| p.id == 2));

        service.delete(2).await.expect("Failed to delete post");

        assert!(
            !service.cache().contains(&CacheKey::Posts),
            "Delete invalidates the list-all entry"
        );

        let after = service.list_all().await.expect("Failed to list posts");
        assert!(
            after.iter().all(|p| p.id != 2),
            "Re-fetch must not serve the removed row from stale cache"
        );
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    async fn test_delete_missing_post_is_not_found(pool: PgPool) {
        let service = PostService::new(pool);

        let result = service.delete(99).await;
        assert!(matches!(result, Err(PostError::NotFound(99))));
    }
}
