use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    New,
    Contacted,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: Status,
    pub created_at: i64,
}

impl ContactSubmission {
    pub fn is_new(&self) -> bool {
        self.status == Status::New
    }

    pub fn is_contacted(&self) -> bool {
        self.status == Status::Contacted
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
