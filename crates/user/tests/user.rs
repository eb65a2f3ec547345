use temp_dir::TempDir;
use triove_shared::{Error, Role};
use triove_user::{CreateInput, LoginInput};

mod helpers;

#[tokio::test]
async fn test_create_and_login() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_user::Command::new(state);

    let id = command
        .create(CreateInput {
            email: " Jane@Triove.localhost ".to_owned(),
            password: "my_password".to_owned(),
            role: Role::Member,
        })
        .await?;

    let principal = command
        .login(LoginInput {
            email: "jane@triove.localhost".to_owned(),
            password: "my_password".to_owned(),
        })
        .await?;

    assert_eq!(principal.id, id);
    assert_eq!(principal.email, "jane@triove.localhost");
    assert_eq!(principal.role, Role::Member);
    assert!(!principal.is_admin());

    let found = command.find_principal(&id).await?.unwrap();
    assert_eq!(found, principal);

    Ok(())
}

#[tokio::test]
async fn test_login_with_wrong_password() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_user::Command::new(state);

    command
        .create(CreateInput {
            email: "jane@triove.localhost".to_owned(),
            password: "my_password".to_owned(),
            role: Role::User,
        })
        .await?;

    let wrong_password = command
        .login(LoginInput {
            email: "jane@triove.localhost".to_owned(),
            password: "not_my_password".to_owned(),
        })
        .await;
    assert!(matches!(wrong_password, Err(Error::User(_))));

    let unknown = command
        .login(LoginInput {
            email: "john@triove.localhost".to_owned(),
            password: "my_password".to_owned(),
        })
        .await;
    assert!(matches!(unknown, Err(Error::User(_))));

    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_user::Command::new(state);

    let input = || CreateInput {
        email: "jane@triove.localhost".to_owned(),
        password: "my_password".to_owned(),
        role: Role::User,
    };

    command.create(input()).await?;
    assert!(matches!(
        command.create(input()).await,
        Err(Error::Conflict(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_set_role() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_user::Command::new(state);

    command
        .create(CreateInput {
            email: "jane@triove.localhost".to_owned(),
            password: "my_password".to_owned(),
            role: Role::User,
        })
        .await?;

    command.set_role("jane@triove.localhost", Role::Admin).await?;
    let principal = command.find_by_email("jane@triove.localhost").await?.unwrap();
    assert!(principal.is_admin());

    assert!(matches!(
        command.set_role("nobody@triove.localhost", Role::Admin).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_concurrent_duplicate_email_is_a_conflict() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_user::Command::new(state);

    let input = || CreateInput {
        email: "jane@triove.localhost".to_owned(),
        password: "my_password".to_owned(),
        role: Role::User,
    };

    let (first, second) = tokio::join!(command.create(input()), command.create(input()));

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(Error::Conflict(_))))
            .count(),
        1
    );

    Ok(())
}
