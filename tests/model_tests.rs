mod common;

#[cfg(test)]
pub mod model_tests {
    use super::common::*;

    use aix::common::*;
    use aix::models::*;
    use aix::services::cache::{CacheKey, QueryCache};
    use aix::services::posts::parse_user_id;

    #[test]
    fn test_post_update_is_empty_success() {
        let update = PostUpdate::default();
        assert!(update.is_empty());
    }

    #[test]
    fn test_post_update_is_empty_fails_on_nonempty_field() {
        let update = PostUpdate {
            title: Some("新しいタイトル".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());

        let update = PostUpdate {
            tags: Some("効率化".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_post_query_fields_success() {
        let fields = PostQuery::fields();

        assert_eq!(fields.len(), 6);
        assert!(fields.contains(&"user_id"));
        assert!(fields.contains(&"tag"));
        assert!(fields.contains(&"created_at"));
        assert!(fields.contains(&"offset"));
        assert!(fields.contains(&"limit"));
        assert!(fields.contains(&"sort_by"));
    }

    #[test]
    fn test_post_query_is_empty_success_on_default() {
        assert!(PostQuery::default().is_empty());
    }

    #[test]
    fn test_post_query_is_empty_success_on_pagination_only() {
        let query = PostQuery {
            offset: Some(10),
            limit: Some(5),
            ..Default::default()
        };

        assert!(
            query.is_empty(),
            "Pagination parameters alone do not select anything"
        );
    }

    #[test]
    fn test_post_query_is_empty_fails_on_filter() {
        let query = PostQuery {
            user_id: Some(1),
            ..Default::default()
        };
        assert!(!query.is_empty());

        let query = PostQuery {
            tag: Some("効率化".into()),
            ..Default::default()
        };
        assert!(!query.is_empty());
    }

    #[test]
    fn test_tag_list_splits_and_trims() {
        let post = Post {
            tags: Some("ChatGPT, 画像生成 ,効率化,".to_string()),
            ..get_seed_post_summary()
        };

        assert_eq!(post.tag_list(), vec!["ChatGPT", "画像生成", "効率化"]);
    }

    #[test]
    fn test_tag_list_empty_when_absent() {
        let post = Post {
            tags: None,
            ..get_seed_post_summary()
        };

        assert!(post.tag_list().is_empty());
    }

    #[test]
    fn test_post_from_post_with_counts() {
        let seed = get_seed_post_summary();
        let with_counts = PostWithCounts {
            id: seed.id,
            title: seed.title.clone(),
            summary: seed.summary.clone(),
            ai_tools: seed.ai_tools.clone(),
            purpose: seed.purpose.clone(),
            method: seed.method.clone(),
            results: seed.results.clone(),
            tags: seed.tags.clone(),
            user_id: seed.user_id,
            created_at: seed.created_at,
            updated_at: seed.updated_at,
            likes_count: 2,
            comments_count: 1,
        };

        assert_eq!(Post::from(with_counts), seed);
    }

    #[test]
    fn test_profile_iden_from_id() {
        assert_eq!(ProfileIden::Id(7), ProfileIden::from(7));
    }

    #[test]
    fn test_profile_iden_from_email() {
        let profile = get_seed_profile_sato();
        assert_eq!(
            ProfileIden::Email(profile.email.clone()),
            ProfileIden::from(profile.email.as_str())
        );
    }

    #[test]
    fn test_profile_display_bio_fallback() {
        let profile = get_seed_profile_suzuki();
        assert_eq!(profile.display_bio(), "自己紹介文がありません");

        let profile = get_seed_profile_sato();
        assert_eq!(profile.display_bio(), "AIツールが好きです");
    }

    #[test]
    fn test_parse_user_id_success() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert_eq!(parse_user_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn test_parse_user_id_fails_on_non_numeric() {
        let err = parse_user_id("user-42").unwrap_err();

        assert!(
            matches!(&err, PostError::InvalidUserId(raw) if raw == "user-42"),
            "Non-numeric identifiers must surface as a validation error"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_database_error_is_not_validation() {
        let err = PostError::Database(sqlx::Error::RowNotFound);
        assert!(!err.is_validation());
    }

    #[test]
    fn test_cache_put_get_roundtrip() {
        let cache = QueryCache::new();
        let posts = vec![get_seed_post_summary(), get_seed_post_banner()];

        cache.put(CacheKey::Posts, &posts);

        assert_eq!(cache.get::<Vec<Post>>(&CacheKey::Posts), Some(posts));
    }

    #[test]
    fn test_cache_invalidate_removes_entry() {
        let cache = QueryCache::new();
        cache.put(CacheKey::Post(1), &get_seed_post_summary());
        assert!(cache.contains(&CacheKey::Post(1)));

        cache.invalidate(&CacheKey::Post(1));

        assert!(!cache.contains(&CacheKey::Post(1)));
        assert_eq!(cache.get::<Post>(&CacheKey::Post(1)), None);
    }

    #[test]
    fn test_cache_keys_are_distinct_per_parameter() {
        let cache = QueryCache::new();
        cache.put(CacheKey::Post(1), &get_seed_post_summary());

        assert!(!cache.contains(&CacheKey::Post(2)));
        assert!(!cache.contains(&CacheKey::Posts));

        // Invalidating one post's entry leaves the others alone.
        cache.put(CacheKey::Post(2), &get_seed_post_banner());
        cache.invalidate(&CacheKey::Post(1));
        assert!(cache.contains(&CacheKey::Post(2)));
    }
}
