use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use triove_contact::SubmitFormInput;

use crate::{
    routes::AppState,
    template::{Template, Toast, Viewer, toast_for},
};

pub const SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch shortly.";

#[derive(Deserialize, Default, Clone)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ActionInput> for SubmitFormInput {
    fn from(value: ActionInput) -> Self {
        Self {
            name: value.name,
            email: value.email,
            company: Some(value.company),
            phone: Some(value.phone),
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub viewer: Viewer,
    pub form: ActionInput,
    pub toast: Option<Toast>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        viewer: template.viewer.clone(),
        form: ActionInput::default(),
        toast: None,
    })
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    match app_state
        .contact_command
        .submit_form(input.clone().into())
        .await
    {
        Ok(_) => template.render(ContactTemplate {
            viewer: template.viewer.clone(),
            form: ActionInput::default(),
            toast: Some(Toast::success(SUCCESS_MESSAGE)),
        }),
        Err(err) => template.render(ContactTemplate {
            viewer: template.viewer.clone(),
            form: input,
            toast: Some(toast_for(&err)),
        }),
    }
}
