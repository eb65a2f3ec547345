use std::{convert::Infallible, str::FromStr};

use axum::{
    Form,
    extract::{Path, Query, State},
    http::header,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::Stream;
use serde::Deserialize;
use strum::VariantArray;
use tokio::sync::broadcast::error::RecvError;
use triove_contact::{AdminView, ContactSubmission, Status, StatusFilter};

use crate::{
    auth::AuthAdmin,
    routes::AppState,
    template::{Template, Toast, Viewer, filters},
};

pub const CHANGED_EVENT: &str = "contacts-changed";

#[derive(askama::Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub viewer: Viewer,
    pub contacts: Vec<ContactSubmission>,
    pub total: usize,
    pub status: StatusFilter,
    pub search: String,
    pub statuses: &'static [Status],
    pub toast: Option<Toast>,
}

impl AdminTemplate {
    fn new(viewer: Viewer, view: &AdminView, toast: Option<Toast>) -> Self {
        Self {
            viewer,
            contacts: view.filtered().to_vec(),
            total: view.source().len(),
            status: view.status(),
            search: view.search().to_owned(),
            statuses: Status::VARIANTS,
            toast,
        }
    }

    /// Query string that keeps the current filters across form posts.
    pub fn filter_query(&self) -> String {
        filter_query(self.status, &self.search)
    }
}

fn filter_query(status: StatusFilter, search: &str) -> String {
    format!("status={status}&q={}", urlencoding::encode(search))
}

#[derive(Deserialize, Default)]
pub struct FilterQuery {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub q: String,
}

impl FilterQuery {
    fn status(&self) -> StatusFilter {
        StatusFilter::from_str(&self.status).unwrap_or(StatusFilter::All)
    }
}

async fn load_view(
    app_state: &AppState,
    principal: &triove_shared::Principal,
    query: &FilterQuery,
) -> triove_shared::Result<AdminView> {
    let mut view = AdminView::new(vec![], query.status(), query.q.to_owned());
    view.refresh(&app_state.contact_query, principal).await?;

    Ok(view)
}

pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    Query(query): Query<FilterQuery>,
    AuthAdmin(principal): AuthAdmin,
) -> impl IntoResponse {
    let view = crate::try_page_response!(load_view(&app_state, &principal, &query), template);

    template.render(AdminTemplate::new(template.viewer.clone(), &view, None))
}

#[derive(Deserialize)]
pub struct StatusInput {
    pub status: String,
}

pub async fn update_status(
    template: Template,
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FilterQuery>,
    AuthAdmin(principal): AuthAdmin,
    Form(input): Form<StatusInput>,
) -> impl IntoResponse {
    let result = match Status::from_str(&input.status) {
        Ok(status) => {
            app_state
                .contact_command
                .update_status(&principal, id, status)
                .await
        }
        Err(_) => Err(triove_shared::Error::User(format!(
            "Unknown status {}",
            input.status
        ))),
    };

    let toast = match result {
        Ok(_) => Toast::success("Updated status"),
        Err(err) => {
            tracing::warn!(error = %err, "status update failed");
            Toast::error("Failed to update status")
        }
    };

    let view = crate::try_page_response!(load_view(&app_state, &principal, &query), template);

    template.render(AdminTemplate::new(
        template.viewer.clone(),
        &view,
        Some(toast),
    ))
}

pub async fn export(
    template: Template,
    State(app_state): State<AppState>,
    Query(query): Query<FilterQuery>,
    AuthAdmin(principal): AuthAdmin,
) -> Response {
    let view = crate::try_page_response!(load_view(&app_state, &principal, &query), template);
    let export = crate::try_page_response!(sync: view.export(), template);

    let Some(export) = export else {
        return template.render(AdminTemplate::new(
            template.viewer.clone(),
            &view,
            Some(Toast::error("No rows to export")),
        ));
    };

    tracing::info!(rows = view.filtered().len(), filename = %export.filename, "contacts exported");

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.content,
    )
        .into_response()
}

/// Pushes a `contacts-changed` event for every submission change so open
/// admin pages can reload their list.
pub async fn events(
    State(app_state): State<AppState>,
    AuthAdmin(_principal): AuthAdmin,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = app_state.contact_command.notifier().subscribe();

    let stream = futures::stream::unfold(receiver, |mut receiver| async move {
        match receiver.recv().await {
            Ok(change) => {
                tracing::debug!(?change, "forwarding contact change");
                Some((Ok(Event::default().event(CHANGED_EVENT).data("1")), receiver))
            }
            // missed events collapse into one refresh
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "admin event stream lagged");
                Some((Ok(Event::default().event(CHANGED_EVENT).data("1")), receiver))
            }
            Err(RecvError::Closed) => None,
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
