use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use triove_shared::Role;
use ulid::Ulid;
use validator::Validate;

use crate::repository;

#[derive(Validate)]
pub struct CreateInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub role: Role,
}

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> triove_shared::Result<String> {
        let input = CreateInput {
            email: input.email.trim().to_lowercase(),
            ..input
        };
        input.validate()?;

        if repository::find(
            &self.read_db,
            repository::FindType::Email(input.email.to_owned()),
        )
        .await?
        .is_some()
        {
            return Err(triove_shared::Error::Conflict(
                "Email already exists".to_owned(),
            ));
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let id = Ulid::new().to_string();
        repository::create(
            &self.write_db,
            id.to_owned(),
            input.email,
            password_hash,
            input.role,
        )
        .await?;

        tracing::info!(user_id = %id, role = %input.role, "user created");

        Ok(id)
    }
}
