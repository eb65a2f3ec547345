use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use triove_contact::{ContactSubmission, Status, SubmitFormInput};
use triove_insight::{BlogPost, CaseStudy, CreateCaseStudyInput, CreatePostInput};

use crate::{auth::ApiAdmin, error::ApiError, routes::AppState};

#[derive(Serialize)]
pub struct Created {
    pub id: String,
}

#[derive(Deserialize)]
pub struct CreateContactBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

pub async fn create_contact(
    State(app_state): State<AppState>,
    body: Result<Json<CreateContactBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let id = app_state
        .contact_command
        .submit_form(SubmitFormInput {
            name: body.name,
            email: body.email,
            company: body.company,
            phone: body.phone,
            subject: body.subject,
            message: body.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn list_contacts(
    State(app_state): State<AppState>,
    ApiAdmin(principal): ApiAdmin,
) -> Result<Json<Vec<ContactSubmission>>, ApiError> {
    Ok(Json(app_state.contact_query.list(&principal).await?))
}

#[derive(Deserialize)]
pub struct StatusBody {
    pub status: Status,
}

pub async fn update_contact_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ApiAdmin(principal): ApiAdmin,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body?;
    app_state
        .contact_command
        .update_status(&principal, id, body.status)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_posts(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    Ok(Json(app_state.insight_query.published_posts().await?))
}

pub async fn get_post(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    match app_state.insight_query.post_by_slug(slug.to_owned()).await? {
        Some(post) if post.is_published => Ok(Json(post)),
        _ => Err(triove_shared::Error::NotFound(format!("blog post {slug}")).into()),
    }
}

#[derive(Deserialize)]
pub struct CreatePostBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

pub async fn create_post(
    State(app_state): State<AppState>,
    ApiAdmin(principal): ApiAdmin,
    body: Result<Json<CreatePostBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let id = app_state
        .insight_command
        .create_post(
            &principal,
            CreatePostInput {
                title: body.title,
                slug: body.slug,
                excerpt: body.excerpt,
                content: body.content,
                author: body.author,
                tags: body.tags,
                image_url: body.image_url,
                is_published: body.is_published,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

#[derive(Deserialize)]
pub struct PublishedBody {
    pub published: bool,
}

pub async fn set_post_published(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
    ApiAdmin(principal): ApiAdmin,
    body: Result<Json<PublishedBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body?;
    let Some(post) = app_state.insight_query.post_by_slug(slug.to_owned()).await? else {
        return Err(triove_shared::Error::NotFound(format!("blog post {slug}")).into());
    };

    app_state
        .insight_command
        .set_published(&principal, post.id, body.published)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct CaseStudyQuery {
    pub industry: Option<String>,
}

pub async fn list_case_studies(
    State(app_state): State<AppState>,
    Query(query): Query<CaseStudyQuery>,
) -> Result<Json<Vec<CaseStudy>>, ApiError> {
    let case_studies = match query.industry.filter(|i| !i.trim().is_empty()) {
        Some(industry) => {
            app_state
                .insight_query
                .case_studies_by_industry(industry)
                .await?
        }
        _ => app_state.insight_query.published_case_studies().await?,
    };

    Ok(Json(case_studies))
}

#[derive(Deserialize)]
pub struct CreateCaseStudyBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub results: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

pub async fn create_case_study(
    State(app_state): State<AppState>,
    ApiAdmin(principal): ApiAdmin,
    body: Result<Json<CreateCaseStudyBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let id = app_state
        .insight_command
        .create_case_study(
            &principal,
            CreateCaseStudyInput {
                title: body.title,
                client: body.client,
                industry: body.industry,
                challenge: body.challenge,
                solution: body.solution,
                results: body.results,
                image_url: body.image_url,
                is_published: body.is_published,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}
