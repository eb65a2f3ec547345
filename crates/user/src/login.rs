use argon2::{Argon2, PasswordHash, PasswordVerifier};
use triove_shared::Principal;
use validator::Validate;

use crate::repository;

#[derive(Validate)]
pub struct LoginInput {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    pub async fn login(&self, input: LoginInput) -> triove_shared::Result<Principal> {
        input.validate()?;

        let Some(user_row) = repository::find(
            &self.read_db,
            repository::FindType::Email(input.email.trim().to_lowercase()),
        )
        .await?
        else {
            triove_shared::user!("Invalid email or password. Please try again.");
        };

        let parsed_hash = PasswordHash::new(&user_row.password_hash)?;
        let argon2 = Argon2::default();

        if argon2
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            triove_shared::user!("Invalid email or password. Please try again.");
        }

        Ok(user_row.into())
    }
}
