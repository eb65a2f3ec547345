use sea_query::{Expr, ExprTrait, Func, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use triove_db::table::BlogPost;
use triove_shared::Principal;
use ulid::Ulid;
use validator::Validate;

use super::RE_SLUG;

#[derive(Validate, Default, Clone, Debug)]
pub struct CreatePostInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(regex(
        path = *RE_SLUG,
        message = "Only lowercase letters, digits and single dashes are allowed."
    ))]
    pub slug: String,
    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl CreatePostInput {
    fn normalize(self) -> Self {
        Self {
            title: self.title.trim().to_owned(),
            slug: self.slug.trim().to_owned(),
            excerpt: self.excerpt.trim().to_owned(),
            content: self.content.trim().to_owned(),
            author: self.author.trim().to_owned(),
            tags: self
                .tags
                .iter()
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty())
                .collect(),
            image_url: self
                .image_url
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty()),
            is_published: self.is_published,
        }
    }
}

impl crate::Command {
    /// Stores a new post. `published_at` is set only when the post is
    /// published at creation.
    pub async fn create_post(
        &self,
        principal: &Principal,
        input: CreatePostInput,
    ) -> triove_shared::Result<String> {
        principal.require_admin()?;

        let input = input.normalize();
        input.validate()?;

        if crate::Query(self.0.clone())
            .post_by_slug(&input.slug)
            .await?
            .is_some()
        {
            return Err(triove_shared::Error::Conflict(format!(
                "Slug {} is already used",
                input.slug
            )));
        }

        let id = Ulid::new().to_string();
        let now = triove_shared::now_millis();
        let published_at = input.is_published.then_some(now);
        let tags = serde_json::to_string(&input.tags)
            .map_err(|e| triove_shared::Error::Unknown(e.into()))?;

        let statement = sea_query::Query::insert()
            .into_table(BlogPost::Table)
            .columns([
                BlogPost::Id,
                BlogPost::Title,
                BlogPost::Slug,
                BlogPost::Excerpt,
                BlogPost::Content,
                BlogPost::Author,
                BlogPost::Tags,
                BlogPost::ImageUrl,
                BlogPost::IsPublished,
                BlogPost::PublishedAt,
                BlogPost::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.title.into(),
                input.slug.to_owned().into(),
                input.excerpt.into(),
                input.content.into(),
                input.author.into(),
                tags.into(),
                input.image_url.into(),
                input.is_published.into(),
                published_at.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
            .map_err(|e| {
                triove_shared::Error::unique(e, format!("Slug {} is already used", input.slug))
            })?;

        tracing::info!(post_id = %id, slug = %input.slug, published = input.is_published, "blog post created");

        Ok(id)
    }

    /// Toggles visibility. The first publication stamps `published_at`; it is
    /// never cleared or moved afterwards.
    pub async fn set_published(
        &self,
        principal: &Principal,
        id: impl Into<String>,
        published: bool,
    ) -> triove_shared::Result<()> {
        principal.require_admin()?;

        let id = id.into();
        let mut statement = sea_query::Query::update()
            .table(BlogPost::Table)
            .value(BlogPost::IsPublished, published)
            .and_where(Expr::col(BlogPost::Id).eq(id.to_owned()))
            .to_owned();

        if published {
            statement.value(
                BlogPost::PublishedAt,
                Func::coalesce([
                    Expr::col(BlogPost::PublishedAt),
                    Expr::val(triove_shared::now_millis()),
                ]),
            );
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            triove_shared::not_found!("blog post {id}");
        }

        tracing::info!(post_id = %id, published, "blog post visibility changed");

        Ok(())
    }
}
