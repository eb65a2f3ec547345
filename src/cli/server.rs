use anyhow::Result;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use triove::AppState;

pub async fn serve(
    config: triove::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting triove server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // Writer first so WAL mode and the schema exist before readers attach.
    let write_pool = triove::db::create_write_pool(&config.database.url).await?;
    triove_db::migrate(&write_pool).await?;

    let read_pool =
        triove::db::create_read_pool(&config.database.url, config.database.max_connections)
            .await?;

    let state = AppState::new(
        config,
        triove_shared::State {
            read_db: read_pool.clone(),
            write_db: write_pool.clone(),
        },
    );

    ensure_root_user(&state).await?;

    let app = triove::routes::router(state)
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pools...");
    read_pool.close().await;
    write_pool.close().await;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn ensure_root_user(state: &AppState) -> Result<()> {
    let root = &state.config.root;
    if state.user_command.find_by_email(&root.email).await?.is_some() {
        return Ok(());
    }

    state
        .user_command
        .create(triove_user::CreateInput {
            email: root.email.to_owned(),
            password: root.password.to_owned(),
            role: triove_shared::Role::Admin,
        })
        .await?;

    tracing::info!(email = %root.email, "root admin created");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
