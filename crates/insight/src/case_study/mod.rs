use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;
use triove_db::table::CaseStudy as Table;
use triove_shared::Principal;
use ulid::Ulid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: i64,
}

#[derive(Validate, Default, Clone, Debug)]
pub struct CreateCaseStudyInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Client is required"))]
    pub client: String,
    #[validate(length(min = 1, message = "Industry is required"))]
    pub industry: String,
    #[validate(length(min = 1, message = "Challenge is required"))]
    pub challenge: String,
    #[validate(length(min = 1, message = "Solution is required"))]
    pub solution: String,
    #[validate(length(min = 1, message = "Results are required"))]
    pub results: String,
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl crate::Command {
    pub async fn create_case_study(
        &self,
        principal: &Principal,
        input: CreateCaseStudyInput,
    ) -> triove_shared::Result<String> {
        principal.require_admin()?;

        let input = CreateCaseStudyInput {
            title: input.title.trim().to_owned(),
            client: input.client.trim().to_owned(),
            industry: input.industry.trim().to_owned(),
            challenge: input.challenge.trim().to_owned(),
            solution: input.solution.trim().to_owned(),
            results: input.results.trim().to_owned(),
            image_url: input
                .image_url
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty()),
            is_published: input.is_published,
        };
        input.validate()?;

        let id = Ulid::new().to_string();
        let statement = sea_query::Query::insert()
            .into_table(Table::Table)
            .columns([
                Table::Id,
                Table::Title,
                Table::Client,
                Table::Industry,
                Table::Challenge,
                Table::Solution,
                Table::Results,
                Table::ImageUrl,
                Table::IsPublished,
                Table::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.title.into(),
                input.client.into(),
                input.industry.into(),
                input.challenge.into(),
                input.solution.into(),
                input.results.into(),
                input.image_url.into(),
                input.is_published.into(),
                triove_shared::now_millis().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(case_study_id = %id, "case study created");

        Ok(id)
    }
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Table::Id,
            Table::Title,
            Table::Client,
            Table::Industry,
            Table::Challenge,
            Table::Solution,
            Table::Results,
            Table::ImageUrl,
            Table::IsPublished,
            Table::CreatedAt,
        ])
        .from(Table::Table)
        .and_where(Expr::col(Table::IsPublished).eq(true))
        .order_by(Table::CreatedAt, Order::Desc)
        .to_owned()
}

impl crate::Query {
    pub async fn published_case_studies(&self) -> triove_shared::Result<Vec<CaseStudy>> {
        let (sql, values) = select().build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CaseStudy, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn case_studies_by_industry(
        &self,
        industry: impl Into<String>,
    ) -> triove_shared::Result<Vec<CaseStudy>> {
        let statement = select()
            .and_where(Expr::col(Table::Industry).eq(industry.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CaseStudy, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
