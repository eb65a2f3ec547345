use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use triove_db::table::ContactSubmission as Table;
use triove_shared::Principal;

use crate::{ContactSubmission, Status};

#[derive(Debug, FromRow)]
struct ContactRow {
    id: String,
    name: String,
    email: String,
    company: Option<String>,
    phone: Option<String>,
    subject: String,
    message: String,
    status: sqlx::types::Text<Status>,
    created_at: i64,
}

impl From<ContactRow> for ContactSubmission {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            company: row.company,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            status: row.status.0,
            created_at: row.created_at,
        }
    }
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Table::Id,
            Table::Name,
            Table::Email,
            Table::Company,
            Table::Phone,
            Table::Subject,
            Table::Message,
            Table::Status,
            Table::CreatedAt,
        ])
        .from(Table::Table)
        .to_owned()
}

impl super::Query {
    /// Every submission, newest first. Filtering happens on the caller side.
    pub async fn list(
        &self,
        principal: &Principal,
    ) -> triove_shared::Result<Vec<ContactSubmission>> {
        principal.require_admin()?;

        let statement = select()
            .order_by(Table::CreatedAt, Order::Desc)
            // same-millisecond rows fall back to insertion order
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        principal: &Principal,
        id: impl Into<String>,
    ) -> triove_shared::Result<Option<ContactSubmission>> {
        principal.require_admin()?;

        let statement = select()
            .and_where(Expr::col(Table::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Into::into))
    }
}
