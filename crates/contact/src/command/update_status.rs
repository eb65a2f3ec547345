use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use triove_db::table::ContactSubmission;
use triove_shared::Principal;

use crate::{ContactChanged, Status};

impl super::Command {
    /// Sets the status of a submission. Any status may follow any other.
    pub async fn update_status(
        &self,
        principal: &Principal,
        id: impl Into<String>,
        status: Status,
    ) -> triove_shared::Result<()> {
        principal.require_admin()?;

        let id = id.into();
        let statement = sea_query::Query::update()
            .table(ContactSubmission::Table)
            .value(ContactSubmission::Status, status.to_string())
            .and_where(Expr::col(ContactSubmission::Id).eq(id.to_owned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            triove_shared::not_found!("contact submission {id}");
        }

        tracing::info!(contact_id = %id, %status, by = %principal.email, "contact status updated");

        self.notifier
            .notify(ContactChanged::StatusChanged { id, status });

        Ok(())
    }
}
