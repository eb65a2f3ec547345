use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use triove_contact::SubmitFormInput;
use triove_shared::{Principal, Role, State};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    triove_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn admin() -> Principal {
    Principal {
        id: "admin".to_owned(),
        email: "admin@triove.localhost".to_owned(),
        role: Role::Admin,
    }
}

#[allow(dead_code)]
pub fn member() -> Principal {
    Principal {
        id: "member".to_owned(),
        email: "member@triove.localhost".to_owned(),
        role: Role::Member,
    }
}

#[allow(dead_code)]
pub async fn create_submit(
    cmd: &triove_contact::Command,
    name: impl Into<String>,
) -> anyhow::Result<String> {
    let ids = create_submit_all(cmd, vec![name]).await?;

    Ok(ids.first().unwrap().to_owned())
}

#[allow(dead_code)]
pub async fn create_submit_all(
    cmd: &triove_contact::Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let name = name.into();
        let id = cmd
            .submit_form(SubmitFormInput {
                name: name.to_owned(),
                email: format!("{name}@triove.localhost"),
                company: None,
                phone: None,
                subject: "General".to_owned(),
                message: "my message".to_owned(),
            })
            .await?;
        ids.push(id);
    }

    Ok(ids)
}
