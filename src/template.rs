use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const FORBIDDEN: &str = "Forbidden";

pub(crate) mod filters {
    use time::{OffsetDateTime, macros::format_description};

    /// Epoch milliseconds, whatever the reference depth askama hands over.
    pub trait Millis {
        fn millis(&self) -> i64;
    }

    impl Millis for i64 {
        fn millis(&self) -> i64 {
            *self
        }
    }

    impl<T: Millis + ?Sized> Millis for &T {
        fn millis(&self) -> i64 {
            (**self).millis()
        }
    }

    fn to_date(value: i64) -> askama::Result<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(value as i128 * 1_000_000)
            .map_err(|e| askama::Error::Custom(Box::new(e)))
    }

    /// `Jan 2, 2025`
    #[askama::filter_fn]
    pub fn date<T: Millis>(value: T, _values: &dyn askama::Values) -> askama::Result<String> {
        to_date(value.millis())?
            .format(format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .map_err(|e| askama::Error::Custom(Box::new(e)))
    }

    #[askama::filter_fn]
    pub fn date_time<T: Millis>(
        value: T,
        _values: &dyn askama::Values,
    ) -> askama::Result<String> {
        to_date(value.millis())?
            .format(format_description!(
                "[month repr:short] [day padding:none], [year] [hour]:[minute]"
            ))
            .map_err(|e| askama::Error::Custom(Box::new(e)))
    }
}

/// Who is looking at the page, as far as the layout cares.
#[derive(Clone, Debug, Default)]
pub struct Viewer {
    pub email: Option<String>,
    pub is_admin: bool,
}

impl Viewer {
    pub fn signed_in(&self) -> bool {
        self.email.is_some()
    }
}

impl From<Option<&triove_shared::Principal>> for Viewer {
    fn from(value: Option<&triove_shared::Principal>) -> Self {
        match value {
            Some(principal) => Self {
                email: Some(principal.email.to_owned()),
                is_admin: principal.is_admin(),
            },
            _ => Self::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, ToastKind::Success)
    }
}

pub struct Template {
    pub viewer: Viewer,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }

    pub fn not_found(&self) -> Response {
        self.render_with_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                viewer: self.viewer.clone(),
            },
        )
    }

    pub fn forbidden(&self) -> Response {
        self.render_with_status(
            StatusCode::FORBIDDEN,
            ForbiddenTemplate {
                viewer: self.viewer.clone(),
            },
        )
    }

    pub fn server_error(&self) -> Response {
        self.render_with_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            ServerTemplate {
                viewer: self.viewer.clone(),
            },
        )
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = crate::auth::resolve_principal(parts, state).await;

        Ok(Template {
            viewer: principal.as_ref().into(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub viewer: Viewer,
}

#[derive(askama::Template)]
#[template(path = "403.html")]
pub struct ForbiddenTemplate {
    pub viewer: Viewer,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub viewer: Viewer,
}

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template.server_error();
            }
        }
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template.server_error();
            }
        }
    };

    (opt: $result:expr, $template:expr) => {
        match $result.await {
            Ok(Some(r)) => r,
            Ok(_) => return $template.not_found(),
            Err(err) => {
                tracing::error!("{err}");

                return $template.server_error();
            }
        }
    };
}

/// Maps a failed service call to the toast shown to the visitor. Transport
/// failures are logged and replaced by a generic message.
pub fn toast_for(err: &triove_shared::Error) -> Toast {
    match err {
        err if err.is_transport() => {
            tracing::error!("{err}");
            Toast::error(SERVER_ERROR_MESSAGE)
        }
        triove_shared::Error::Forbidden => Toast::error(FORBIDDEN),
        triove_shared::Error::Validate(errors) => Toast::error(validation_message(errors)),
        err => Toast::error(err.to_string()),
    }
}

/// First field message, falling back to the generic validator output.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by_key(|(field, _)| field.to_string());

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
