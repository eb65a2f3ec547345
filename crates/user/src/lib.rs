mod create;
mod login;
mod repository;
mod set_role;

use std::ops::Deref;

pub use create::CreateInput;
pub use login::LoginInput;
use triove_shared::Principal;

#[derive(Clone)]
pub struct Command(triove_shared::State);

impl Deref for Command {
    type Target = triove_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: triove_shared::State) -> Self {
        Self(state)
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> triove_shared::Result<Option<Principal>> {
        let row = repository::find(
            &self.read_db,
            repository::FindType::Email(email.into().trim().to_lowercase()),
        )
        .await?;

        Ok(row.map(Into::into))
    }

    /// Resolves the principal behind an authenticated session.
    pub async fn find_principal(
        &self,
        id: impl Into<String>,
    ) -> triove_shared::Result<Option<Principal>> {
        let row = repository::find(&self.read_db, repository::FindType::Id(id.into())).await?;

        Ok(row.map(Into::into))
    }
}
