use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use triove_shared::Principal;

use crate::{config::JwtConfig, error::ApiError, routes::AppState, template::Template};

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
}

pub fn generate_token(config: &JwtConfig, sub: String) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn build_cookie<'a>(config: &JwtConfig, sub: String) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, sub)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build(AUTH_COOKIE_NAME).path("/").build()
}

fn decode_subject(token: &str, config: &JwtConfig) -> Option<String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .ok()
    .map(|data| data.claims.sub)
}

/// Principal of the session cookie, looked up once and cached in the
/// request extensions for the other extractors.
#[derive(Clone)]
struct Session(Option<Principal>);

pub(crate) async fn resolve_principal(parts: &mut Parts, state: &AppState) -> Option<Principal> {
    if let Some(Session(principal)) = parts.extensions.get::<Session>() {
        return principal.clone();
    }

    let jar = CookieJar::from_headers(&parts.headers);
    let subject = jar
        .get(AUTH_COOKIE_NAME)
        .and_then(|cookie| decode_subject(cookie.value(), &state.config.jwt));

    let principal = match subject {
        Some(id) => match state.user_command.find_principal(id).await {
            Ok(principal) => principal,
            Err(e) => {
                tracing::error!("{e}");
                None
            }
        },
        _ => None,
    };

    parts.extensions.insert(Session(principal.clone()));

    principal
}

/// Admin-only HTML pages. Visitors without a session go to the login page,
/// signed-in non-admins get the forbidden page.
pub struct AuthAdmin(pub Principal);

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(principal) = resolve_principal(parts, state).await else {
            return Err(Redirect::to("/login").into_response());
        };

        if !principal.is_admin() {
            let template = Template {
                viewer: Some(&principal).into(),
            };

            return Err(template.forbidden());
        }

        Ok(AuthAdmin(principal))
    }
}

/// Admin-only JSON endpoints.
pub struct ApiAdmin(pub Principal);

impl FromRequestParts<AppState> for ApiAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(principal) = resolve_principal(parts, state).await else {
            return Err(triove_shared::Error::Unauthorized.into());
        };

        principal.require_admin()?;

        Ok(ApiAdmin(principal))
    }
}
