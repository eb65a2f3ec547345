use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::template::{SERVER_ERROR_MESSAGE, validation_message};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of a JSON endpoint, rendered as `{ "error": message }`.
#[derive(Debug)]
pub enum ApiError {
    Service(triove_shared::Error),
    BadRequest(String),
}

impl From<triove_shared::Error> for ApiError {
    fn from(e: triove_shared::Error) -> Self {
        ApiError::Service(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        use triove_shared::Error;

        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(Error::Validate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Service(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Service(Error::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Service(Error::Forbidden) => StatusCode::FORBIDDEN,
            ApiError::Service(Error::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Service(Error::User(_)) => StatusCode::BAD_REQUEST,
            ApiError::Service(Error::Unknown(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::BadRequest(message) => message,
            ApiError::Service(triove_shared::Error::Validate(errors)) => {
                validation_message(&errors)
            }
            ApiError::Service(err) if err.is_transport() => {
                tracing::error!("{err}");
                SERVER_ERROR_MESSAGE.to_owned()
            }
            ApiError::Service(err) => err.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triove_shared::Error;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(Error::NotFound("contact submission 01".to_owned())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(Error::Unauthorized).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(Error::Forbidden).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(Error::Conflict("Slug already exists".to_owned())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(Error::Unknown(anyhow::anyhow!("disk full"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
