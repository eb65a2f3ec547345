use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::BlogPost;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(BlogPost::Table)
        .col(
            ColumnDef::new(BlogPost::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(BlogPost::Title).string().not_null())
        .col(ColumnDef::new(BlogPost::Slug).string().not_null())
        .col(ColumnDef::new(BlogPost::Excerpt).text().not_null())
        .col(ColumnDef::new(BlogPost::Content).text().not_null())
        .col(ColumnDef::new(BlogPost::Author).string().not_null())
        .col(ColumnDef::new(BlogPost::Tags).json().not_null())
        .col(ColumnDef::new(BlogPost::ImageUrl).string().null())
        .col(
            ColumnDef::new(BlogPost::IsPublished)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(BlogPost::PublishedAt).big_integer().null())
        .col(ColumnDef::new(BlogPost::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(BlogPost::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateSlugIdx;

fn create_slug_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_blog_post_slug")
        .table(BlogPost::Table)
        .unique()
        .col(BlogPost::Slug)
        .to_owned()
}

fn drop_slug_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_blog_post_slug")
        .table(BlogPost::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateSlugIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_slug_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_slug_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreatePublishedIdx;

fn create_published_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_blog_post_published")
        .table(BlogPost::Table)
        .col(BlogPost::IsPublished)
        .col(BlogPost::PublishedAt)
        .to_owned()
}

fn drop_published_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_blog_post_published")
        .table(BlogPost::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreatePublishedIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_published_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_published_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
