mod command;
mod query;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use sqlx::prelude::FromRow;

pub use command::CreatePostInput;

pub(crate) static RE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<i64>,
    pub created_at: i64,
}

impl BlogPost {
    /// Paragraphs of the body, split on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[derive(FromRow)]
struct BlogPostRow {
    id: String,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    author: String,
    tags: sqlx::types::Json<Vec<String>>,
    image_url: Option<String>,
    is_published: bool,
    published_at: Option<i64>,
    created_at: i64,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            author: row.author,
            tags: row.tags.0,
            image_url: row.image_url,
            is_published: row.is_published,
            published_at: row.published_at,
            created_at: row.created_at,
        }
    }
}
