use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Member,
}

/// Who is calling a service operation, resolved once per request.
#[derive(Clone, Debug, PartialEq)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> crate::Result<()> {
        if !self.is_admin() {
            return Err(crate::Error::Forbidden);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn only_admin_passes_the_admin_check() {
        let mut principal = Principal {
            id: "01".to_owned(),
            email: "jane@triove.localhost".to_owned(),
            role: Role::Member,
        };
        assert!(matches!(
            principal.require_admin(),
            Err(crate::Error::Forbidden)
        ));

        principal.role = Role::Admin;
        assert!(principal.require_admin().is_ok());
    }

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::from_str("member").unwrap(), Role::Member);
    }
}
