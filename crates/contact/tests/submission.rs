use triove_contact::{
    AdminView, ContactChanged, Notifier, Status, StatusFilter, SubmitFormInput,
};
use triove_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_submit_form_starts_as_new() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);

    let started = triove_shared::now_millis();
    let id = command
        .submit_form(SubmitFormInput {
            name: " Jane Doe ".to_owned(),
            email: "jane@example.com".to_owned(),
            company: Some("".to_owned()),
            phone: Some(" 555-0100 ".to_owned()),
            subject: "Pricing".to_owned(),
            message: "Need a quote".to_owned(),
        })
        .await?;

    let contact = query.find(&helpers::admin(), &id).await?.unwrap();
    assert_eq!(contact.status, Status::New);
    assert!(contact.created_at >= started);
    assert_eq!(contact.name, "Jane Doe");
    assert_eq!(contact.company, None);
    assert_eq!(contact.phone.as_deref(), Some("555-0100"));

    Ok(())
}

#[tokio::test]
async fn test_submit_form_rejects_missing_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);

    let result = command
        .submit_form(SubmitFormInput {
            name: "Jane".to_owned(),
            email: "jane@example.com".to_owned(),
            subject: "Pricing".to_owned(),
            message: "   ".to_owned(),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(Error::Validate(_))));
    assert!(query.list(&helpers::admin()).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_list_is_newest_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);

    let mut ids = vec![];
    for name in ["first", "second", "third"] {
        ids.push(helpers::create_submit(&command, name).await?);
        tokio::time::sleep(std::time::Duration::from_millis(3)).await;
    }

    let list = query.list(&helpers::admin()).await?;
    ids.reverse();
    assert_eq!(list.iter().map(|c| c.id.to_owned()).collect::<Vec<_>>(), ids);

    for pair in list.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    Ok(())
}

#[tokio::test]
async fn test_list_keeps_insertion_order_within_same_millisecond() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);

    let names = (0..200).map(|i| format!("contact-{i}")).collect::<Vec<_>>();
    let mut ids = helpers::create_submit_all(&command, names).await?;

    let list = query.list(&helpers::admin()).await?;

    ids.reverse();
    assert_eq!(list.into_iter().map(|c| c.id).collect::<Vec<_>>(), ids);

    Ok(())
}

#[tokio::test]
async fn test_update_status_any_to_any() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);
    let admin = helpers::admin();

    let id = helpers::create_submit(&command, "john.doe").await?;

    for status in [
        Status::Closed,
        Status::New,
        Status::Contacted,
        Status::Contacted,
        Status::Closed,
        Status::Contacted,
        Status::New,
    ] {
        command.update_status(&admin, &id, status).await?;
        let list = query.list(&admin).await?;
        assert_eq!(list[0].status, status);
    }

    Ok(())
}

#[tokio::test]
async fn test_update_status_unknown_id_is_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);
    let admin = helpers::admin();

    helpers::create_submit(&command, "john.doe").await?;

    let result = command
        .update_status(&admin, "01ARZ3NDEKTSV4RRFFQ69G5FAV", Status::Closed)
        .await;
    assert!(matches!(result, Err(Error::NotFound(_))));

    let list = query.list(&admin).await?;
    assert!(list.iter().all(|c| c.status == Status::New));

    Ok(())
}

#[tokio::test]
async fn test_non_admin_is_forbidden() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);
    let member = helpers::member();

    let id = helpers::create_submit(&command, "john.doe").await?;

    assert!(matches!(query.list(&member).await, Err(Error::Forbidden)));
    assert!(matches!(
        command.update_status(&member, &id, Status::Closed).await,
        Err(Error::Forbidden)
    ));

    let contact = query.find(&helpers::admin(), &id).await?.unwrap();
    assert_eq!(contact.status, Status::New);

    Ok(())
}

#[tokio::test]
async fn test_changes_are_broadcast() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let notifier = Notifier::default();
    let mut changes = notifier.subscribe();
    let command = triove_contact::Command::new(state, notifier);

    let id = helpers::create_submit(&command, "john.doe").await?;
    command
        .update_status(&helpers::admin(), &id, Status::Contacted)
        .await?;

    assert_eq!(
        changes.recv().await?,
        ContactChanged::Created { id: id.to_owned() }
    );
    assert_eq!(
        changes.recv().await?,
        ContactChanged::StatusChanged {
            id,
            status: Status::Contacted
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_quote_request_walkthrough() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_contact::Command::new(state.clone(), Notifier::default());
    let query = triove_contact::Query(state);
    let admin = helpers::admin();

    helpers::create_submit_all(&command, ["older1", "older2"]).await?;
    tokio::time::sleep(std::time::Duration::from_millis(3)).await;

    let id = command
        .submit_form(SubmitFormInput {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            company: None,
            phone: None,
            subject: "Pricing".to_owned(),
            message: "Need a quote".to_owned(),
        })
        .await?;

    let mut view = AdminView::default();
    view.refresh(&query, &admin).await?;
    assert_eq!(view.filtered()[0].id, id);
    assert_eq!(view.filtered()[0].status, Status::New);

    command.update_status(&admin, &id, Status::Contacted).await?;
    view.refresh(&query, &admin).await?;
    assert_eq!(view.filtered()[0].status, Status::Contacted);

    view.set_status(StatusFilter::Only(Status::Closed));
    assert!(view.filtered().iter().all(|c| c.id != id));

    view.set_status(StatusFilter::All);
    view.set_search("quote");
    assert_eq!(view.filtered().len(), 1);
    assert_eq!(view.filtered()[0].id, id);

    let export = view.export()?.unwrap();
    let mut lines = export.content.lines();
    assert_eq!(
        lines.next(),
        Some("Name,Email,Company,Phone,Subject,Message,Status,Created At")
    );
    assert!(
        lines
            .next()
            .unwrap()
            .starts_with("Jane Doe,jane@example.com,,,Pricing,Need a quote,contacted,")
    );
    assert_eq!(lines.next(), None);

    view.set_search("nothing matches this");
    assert!(view.export()?.is_none());

    Ok(())
}
