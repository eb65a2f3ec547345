use triove_shared::Role;

use crate::repository;

impl super::Command {
    pub async fn set_role(
        &self,
        email: impl Into<String>,
        role: Role,
    ) -> triove_shared::Result<()> {
        let email = email.into().trim().to_lowercase();
        let Some(user) =
            repository::find(&self.read_db, repository::FindType::Email(email.to_owned()))
                .await?
        else {
            triove_shared::not_found!("user {email}");
        };

        if user.role.0 == role {
            return Ok(());
        }

        repository::update_role(&self.write_db, user.id, role).await?;

        tracing::info!(%email, %role, "user role changed");

        Ok(())
    }
}
