use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::CaseStudy;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(CaseStudy::Table)
        .col(
            ColumnDef::new(CaseStudy::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(CaseStudy::Title).string().not_null())
        .col(ColumnDef::new(CaseStudy::Client).string().not_null())
        .col(ColumnDef::new(CaseStudy::Industry).string().not_null())
        .col(ColumnDef::new(CaseStudy::Challenge).text().not_null())
        .col(ColumnDef::new(CaseStudy::Solution).text().not_null())
        .col(ColumnDef::new(CaseStudy::Results).text().not_null())
        .col(ColumnDef::new(CaseStudy::ImageUrl).string().null())
        .col(
            ColumnDef::new(CaseStudy::IsPublished)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(CaseStudy::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(CaseStudy::Table).to_owned()
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

pub struct CreateIndustryIdx;

fn create_industry_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_case_study_industry")
        .table(CaseStudy::Table)
        .col(CaseStudy::Industry)
        .to_owned()
}

fn drop_industry_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_case_study_industry")
        .table(CaseStudy::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIndustryIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_industry_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_industry_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
