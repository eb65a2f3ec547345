use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use triove_db::table::User;
use triove_shared::{Principal, Role};

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: sqlx::types::Text<Role>,
}

impl From<UserRow> for Principal {
    fn from(row: UserRow) -> Self {
        Principal {
            id: row.id,
            email: row.email,
            role: row.role.0,
        }
    }
}

pub enum FindType {
    Id(String),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> triove_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([User::Id, User::Email, User::PasswordHash, User::Role])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    id: String,
    email: String,
    password_hash: String,
    role: Role,
) -> triove_shared::Result<()> {
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Id,
            User::Email,
            User::PasswordHash,
            User::Role,
            User::CreatedAt,
        ])
        .values_panic([
            id.into(),
            email.into(),
            password_hash.into(),
            role.to_string().into(),
            triove_shared::now_millis().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values)
        .execute(pool)
        .await
        .map_err(|e| triove_shared::Error::unique(e, "Email already exists"))?;

    Ok(())
}

pub(crate) async fn update_role(
    pool: &SqlitePool,
    id: String,
    role: Role,
) -> triove_shared::Result<()> {
    let statement = Query::update()
        .table(User::Table)
        .value(User::Role, role.as_ref())
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
