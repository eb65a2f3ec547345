use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post, put},
};

use crate::template::Template;

mod admin;
mod api;
mod contact;
mod health;
mod login;
mod pages;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: triove_user::Command,
    pub contact_command: triove_contact::Command,
    pub contact_query: triove_contact::Query,
    pub insight_command: triove_insight::Command,
    pub insight_query: triove_insight::Query,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: triove_shared::State) -> Self {
        Self {
            config,
            user_command: triove_user::Command::new(state.clone()),
            contact_command: triove_contact::Command::new(
                state.clone(),
                triove_contact::Notifier::default(),
            ),
            contact_query: triove_contact::Query(state.clone()),
            insight_command: triove_insight::Command(state.clone()),
            insight_query: triove_insight::Query(state.clone()),
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/contacts",
            get(api::list_contacts).post(api::create_contact),
        )
        .route("/contacts/{id}/status", put(api::update_contact_status))
        .route("/posts", get(api::list_posts).post(api::create_post))
        .route("/posts/{slug}", get(api::get_post))
        .route("/posts/{slug}/published", put(api::set_post_published))
        .route(
            "/case-studies",
            get(api::list_case_studies).post(api::create_case_study),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.contact_query.read_db.clone())
        .merge(
            Router::new()
                .route("/", get(pages::home))
                .route("/about", get(pages::about))
                .route("/services", get(pages::services))
                .route("/services/{slug}", get(pages::service))
                .route("/industries", get(pages::industries))
                .route("/industries/{slug}", get(pages::industry))
                .route("/insights", get(pages::insights))
                .route("/insights/{slug}", get(pages::insight))
                .route("/contact", get(contact::page).post(contact::action))
                .route("/login", get(login::page).post(login::action))
                .route("/logout", post(login::logout))
                .route("/admin", get(admin::page))
                .route("/admin/contacts/{id}/status", post(admin::update_status))
                .route("/admin/contacts/export", get(admin::export))
                .route("/admin/contacts/events", get(admin::events))
                .nest("/api", api)
                .nest_service("/static", crate::assets::AssetsService::new())
                .fallback(fallback)
                .with_state(app_state),
        )
}
