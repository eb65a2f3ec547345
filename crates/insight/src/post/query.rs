use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use triove_db::table::BlogPost as Table;

use super::{BlogPost, BlogPostRow};

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Table::Id,
            Table::Title,
            Table::Slug,
            Table::Excerpt,
            Table::Content,
            Table::Author,
            Table::Tags,
            Table::ImageUrl,
            Table::IsPublished,
            Table::PublishedAt,
            Table::CreatedAt,
        ])
        .from(Table::Table)
        .to_owned()
}

impl crate::Query {
    /// Published posts, most recently published first.
    pub async fn published_posts(&self) -> triove_shared::Result<Vec<BlogPost>> {
        let statement = select()
            .and_where(Expr::col(Table::IsPublished).eq(true))
            .order_by(Table::PublishedAt, Order::Desc)
            .order_by(Table::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, BlogPostRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Looks a post up by slug whatever its visibility. Absent is not an error.
    pub async fn post_by_slug(
        &self,
        slug: impl Into<String>,
    ) -> triove_shared::Result<Option<BlogPost>> {
        let statement = select()
            .and_where(Expr::col(Table::Slug).eq(slug.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, BlogPostRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Into::into))
    }
}
