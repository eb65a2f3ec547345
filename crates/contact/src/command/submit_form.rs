use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use triove_db::table::ContactSubmission;
use ulid::Ulid;
use validator::Validate;

use crate::{ContactChanged, Status};

#[derive(Validate, Default, Clone, Debug)]
pub struct SubmitFormInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl SubmitFormInput {
    /// Trims every field and drops optional ones left empty.
    fn normalize(self) -> Self {
        let optional = |value: Option<String>| {
            value
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            company: optional(self.company),
            phone: optional(self.phone),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

impl super::Command {
    pub async fn submit_form(&self, input: SubmitFormInput) -> triove_shared::Result<String> {
        let input = input.normalize();
        input.validate()?;

        let id = Ulid::new().to_string();
        let statement = sea_query::Query::insert()
            .into_table(ContactSubmission::Table)
            .columns([
                ContactSubmission::Id,
                ContactSubmission::Name,
                ContactSubmission::Email,
                ContactSubmission::Company,
                ContactSubmission::Phone,
                ContactSubmission::Subject,
                ContactSubmission::Message,
                ContactSubmission::Status,
                ContactSubmission::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.name.into(),
                input.email.into(),
                input.company.into(),
                input.phone.into(),
                input.subject.into(),
                input.message.into(),
                Status::New.to_string().into(),
                triove_shared::now_millis().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(contact_id = %id, "contact form submitted");

        self.notifier
            .notify(ContactChanged::Created { id: id.to_owned() });

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_drops_blank_optionals() {
        let input = SubmitFormInput {
            name: "  Jane Doe ".to_owned(),
            email: " jane@example.com".to_owned(),
            company: Some("   ".to_owned()),
            phone: Some(" 555-0100 ".to_owned()),
            subject: "Pricing ".to_owned(),
            message: "\tNeed a quote\n".to_owned(),
        }
        .normalize();

        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.email, "jane@example.com");
        assert_eq!(input.company, None);
        assert_eq!(input.phone.as_deref(), Some("555-0100"));
        assert_eq!(input.subject, "Pricing");
        assert_eq!(input.message, "Need a quote");
    }

    #[test]
    fn whitespace_only_required_field_fails_validation() {
        let input = SubmitFormInput {
            name: "   ".to_owned(),
            email: "jane@example.com".to_owned(),
            subject: "Pricing".to_owned(),
            message: "Need a quote".to_owned(),
            ..Default::default()
        }
        .normalize();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
