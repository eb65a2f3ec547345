use temp_dir::TempDir;
use triove_insight::CreateCaseStudyInput;
use triove_shared::Error;

mod helpers;

fn case_study(title: &str, industry: &str, is_published: bool) -> CreateCaseStudyInput {
    CreateCaseStudyInput {
        title: title.to_owned(),
        client: "Acme Corp".to_owned(),
        industry: industry.to_owned(),
        challenge: "Legacy billing".to_owned(),
        solution: "Cloud rebuild".to_owned(),
        results: "40% faster close".to_owned(),
        image_url: Some(" ".to_owned()),
        is_published,
    }
}

#[tokio::test]
async fn test_case_studies_by_industry() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_insight::Command(state.clone());
    let query = triove_insight::Query(state);
    let admin = helpers::admin();

    command
        .create_case_study(&admin, case_study("Bank", "Financial Services", true))
        .await?;
    command
        .create_case_study(&admin, case_study("Clinic", "Healthcare", true))
        .await?;
    command
        .create_case_study(&admin, case_study("Hidden", "Healthcare", false))
        .await?;

    let all = query.published_case_studies().await?;
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|c| c.is_published && c.image_url.is_none()));

    let healthcare = query.case_studies_by_industry("Healthcare").await?;
    assert_eq!(
        healthcare.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
        vec!["Clinic"]
    );

    Ok(())
}

#[tokio::test]
async fn test_case_study_requires_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let command = triove_insight::Command(state);

    let result = command
        .create_case_study(&helpers::admin(), case_study("  ", "Retail", true))
        .await;
    assert!(matches!(result, Err(Error::Validate(_))));

    Ok(())
}
