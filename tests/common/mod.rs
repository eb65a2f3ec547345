#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;
use triove::{
    AppState,
    config::{Config, DatabaseConfig, JwtConfig, ObservabilityConfig, RootConfig, ServerConfig},
};
use triove_contact::SubmitFormInput;
use triove_shared::{Principal, Role};

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub admin: Principal,
    pub admin_cookie: String,
    pub member_cookie: String,
    _dir: TempDir,
}

pub fn test_config(database_url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            expiration_days: 7,
            issuer: "triove".to_owned(),
            audience: "triove-admin".to_owned(),
        },
        root: RootConfig {
            email: "root@triove.localhost".to_owned(),
            password: "root_password".to_owned(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn create_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = triove::db::create_pool(&url, 1).await?;
    triove_db::migrate(&pool).await?;

    let state = AppState::new(test_config(url), triove_shared::State::single(pool));

    let admin_id = state
        .user_command
        .create(triove_user::CreateInput {
            email: "admin@triove.localhost".to_owned(),
            password: "admin_password".to_owned(),
            role: Role::Admin,
        })
        .await?;
    let member_id = state
        .user_command
        .create(triove_user::CreateInput {
            email: "member@triove.localhost".to_owned(),
            password: "member_password".to_owned(),
            role: Role::Member,
        })
        .await?;

    let admin = Principal {
        id: admin_id.to_owned(),
        email: "admin@triove.localhost".to_owned(),
        role: Role::Admin,
    };

    let admin_cookie = format!(
        "auth_token={}",
        triove::auth::generate_token(&state.config.jwt, admin_id)?
    );
    let member_cookie = format!(
        "auth_token={}",
        triove::auth::generate_token(&state.config.jwt, member_id)?
    );

    Ok(TestApp {
        router: triove::router(state.clone()),
        state,
        admin,
        admin_cookie,
        member_cookie,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<Response<Body>> {
        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> anyhow::Result<Response<Body>> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::empty())?).await
    }

    pub async fn post_form<T: serde::Serialize>(
        &self,
        uri: &str,
        form: &T,
        cookie: Option<&str>,
    ) -> anyhow::Result<Response<Body>> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::from(serde_urlencoded::to_string(form)?))?)
            .await
    }

    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        body: serde_json::Value,
        cookie: Option<&str>,
    ) -> anyhow::Result<Response<Body>> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::from(body.to_string()))?).await
    }

    pub async fn submit(&self, name: &str, subject: &str, message: &str) -> anyhow::Result<String> {
        Ok(self
            .state
            .contact_command
            .submit_form(SubmitFormInput {
                name: name.to_owned(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                company: None,
                phone: None,
                subject: subject.to_owned(),
                message: message.to_owned(),
            })
            .await?)
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let body = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(body.to_vec())?)
}
