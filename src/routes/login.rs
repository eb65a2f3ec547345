use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use triove_user::LoginInput;

use crate::{
    routes::AppState,
    template::{Template, Viewer, toast_for},
};

#[derive(askama::Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub viewer: Viewer,
    pub error_message: Option<String>,
    pub email: Option<String>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    if template.viewer.signed_in() {
        return Redirect::to("/admin").into_response();
    }

    template.render(LoginTemplate {
        viewer: template.viewer.clone(),
        error_message: None,
        email: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub email: String,
    pub password: String,
}

pub async fn action(
    template: Template,
    jar: CookieJar,
    State(state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let principal = match state
        .user_command
        .login(LoginInput {
            email: input.email.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(principal) => principal,
        Err(e) => {
            return template
                .render(LoginTemplate {
                    viewer: template.viewer.clone(),
                    email: Some(input.email),
                    error_message: Some(toast_for(&e).message),
                })
                .into_response();
        }
    };

    let cookie = match crate::auth::build_cookie(&state.config.jwt, principal.id.to_owned()) {
        Ok(cookie) => cookie,
        Err(e) => {
            tracing::error!("{e}");
            return template.server_error();
        }
    };

    tracing::info!(user_id = %principal.id, "signed in");

    let to = if principal.is_admin() { "/admin" } else { "/" };

    (jar.add(cookie), Redirect::to(to)).into_response()
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(crate::auth::removal_cookie()),
        Redirect::to("/"),
    )
}
