use clap::ValueEnum;
use triove_shared::Role as UserRole;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Role {
    User,
    Member,
    Admin,
}

impl From<Role> for UserRole {
    fn from(value: Role) -> Self {
        match value {
            Role::User => UserRole::User,
            Role::Member => UserRole::Member,
            Role::Admin => UserRole::Admin,
        }
    }
}

async fn command(config: &triove::Config) -> anyhow::Result<triove_user::Command> {
    let pool = triove::db::create_pool(&config.database.url, 1).await?;

    Ok(triove_user::Command::new(triove_shared::State::single(pool)))
}

pub async fn create(
    config: triove::Config,
    email: String,
    password: String,
    role: Role,
) -> anyhow::Result<()> {
    let command = command(&config).await?;
    let id = command
        .create(triove_user::CreateInput {
            email: email.to_owned(),
            password,
            role: role.into(),
        })
        .await?;

    tracing::info!(user_id = %id, "{email} created");

    Ok(())
}

pub async fn set_role(config: triove::Config, email: String, role: Role) -> anyhow::Result<()> {
    let command = command(&config).await?;
    let role = UserRole::from(role);
    command.set_role(email.to_owned(), role).await?;

    tracing::info!("{email} is now {role}");

    Ok(())
}
