use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use triove_shared::State;

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    triove_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn admin() -> triove_shared::Principal {
    triove_shared::Principal {
        id: "admin".to_owned(),
        email: "admin@triove.localhost".to_owned(),
        role: triove_shared::Role::Admin,
    }
}

#[allow(dead_code)]
pub fn post(slug: &str, is_published: bool) -> triove_insight::CreatePostInput {
    triove_insight::CreatePostInput {
        title: format!("Post {slug}"),
        slug: slug.to_owned(),
        excerpt: "Short excerpt".to_owned(),
        content: "First paragraph.\n\nSecond paragraph.".to_owned(),
        author: "TRIOVE Team".to_owned(),
        tags: vec!["cloud".to_owned(), "  ".to_owned(), " data ".to_owned()],
        image_url: None,
        is_published,
    }
}
