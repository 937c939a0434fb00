use chrono::{DateTime, Utc};

use aix::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_profile_sato() -> Profile {
    Profile {
        id: 1,
        username: "sato".to_string(),
        email: "sato@test.com".to_string(),
        password_hash: "password0".to_string(),
        avatar_url: None,
        bio: Some("AIツールが好きです".to_string()),
        notification_likes: true,
        notification_comments: true,
        notification_follows: true,
        email_frequency: "daily".to_string(),
        profile_visibility: "public".to_string(),
        timezone: "Asia/Tokyo".to_string(),
        language: "ja".to_string(),
        theme: "light".to_string(),
        created_at: parse_time("2026-01-04 22:15:06+00"),
        updated_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_seed_profile_suzuki() -> Profile {
    Profile {
        id: 2,
        username: "suzuki".to_string(),
        email: "suzuki@test.com".to_string(),
        password_hash: "password1".to_string(),
        avatar_url: None,
        bio: None,
        notification_likes: true,
        notification_comments: true,
        notification_follows: true,
        email_frequency: "daily".to_string(),
        profile_visibility: "public".to_string(),
        timezone: "Asia/Tokyo".to_string(),
        language: "ja".to_string(),
        theme: "light".to_string(),
        created_at: parse_time("2026-01-05 13:22:56+00"),
        updated_at: parse_time("2026-01-05 13:22:56+00"),
    }
}

pub fn get_seed_post_summary() -> Post {
    Post {
        id: 1,
        title: "ChatGPTで議事録を要約".to_string(),
        summary: "会議の議事録を自動要約した事例".to_string(),
        ai_tools: "ChatGPT".to_string(),
        purpose: Some("議事録作成の時間削減".to_string()),
        method: Some("APIで文字起こしを渡して要約".to_string()),
        results: Some("作業時間が半分になった".to_string()),
        tags: Some("要約,効率化".to_string()),
        user_id: 1,
        created_at: parse_time("2026-01-05 09:00:00+00"),
        updated_at: parse_time("2026-01-05 09:00:00+00"),
    }
}

pub fn get_seed_post_banner() -> Post {
    Post {
        id: 2,
        title: "Stable Diffusionでバナー作成".to_string(),
        summary: "広告バナーの下書きを画像生成で量産".to_string(),
        ai_tools: "Stable Diffusion".to_string(),
        purpose: None,
        method: None,
        results: None,
        tags: Some("画像生成,デザイン".to_string()),
        user_id: 2,
        created_at: parse_time("2026-01-04 18:30:00+00"),
        updated_at: parse_time("2026-01-04 18:30:00+00"),
    }
}

pub fn get_seed_post_review() -> Post {
    Post {
        id: 3,
        title: "Claudeでコードレビュー".to_string(),
        summary: "プルリクエストの一次レビューを自動化".to_string(),
        ai_tools: "Claude".to_string(),
        purpose: Some("レビュー待ち時間の短縮".to_string()),
        method: None,
        results: None,
        tags: Some("効率化,開発".to_string()),
        user_id: 1,
        created_at: parse_time("2026-01-06 08:45:00+00"),
        updated_at: parse_time("2026-01-06 08:45:00+00"),
    }
}
