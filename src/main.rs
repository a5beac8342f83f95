use anyhow::Result;
use axum::{ServiceExt, body::Body};
use content_core::application::{
    ports::{ids::IdGenerator, time::Clock},
    services::{ApplicationServices, WorkflowPolicies},
};
use content_core::config::AppConfig;
use content_core::domain::{
    content::ContentRepository,
    content_definition::ContentDefinitionRepository,
    workspace::{Workspace, WorkspaceRepository},
};
use content_core::infrastructure::{
    database,
    repositories::{
        InMemoryContentDefinitionRepository, InMemoryContentRepository,
        InMemoryWorkspaceRepository, PostgresContentDefinitionRepository,
        PostgresContentRepository, PostgresWorkspaceRepository,
    },
    system::{SystemClock, UuidGenerator},
};
use content_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Repositories {
    contents: Arc<dyn ContentRepository>,
    definitions: Arc<dyn ContentDefinitionRepository>,
    workspaces: Arc<dyn WorkspaceRepository>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repos = build_repositories(&config).await?;

    let workspace = Workspace::new(
        config.default_workspace_id(),
        "default",
        config.default_workspace_languages().to_vec(),
    )?;
    tracing::info!(
        workspace_id = %workspace.id,
        languages = ?workspace.languages,
        "default workspace ready"
    );
    repos.workspaces.upsert(workspace).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);
    let policies = WorkflowPolicies {
        publish: config.publish_policy(),
        archive: config.archive_policy(),
    };

    let services = Arc::new(ApplicationServices::new(
        repos.contents,
        repos.definitions,
        repos.workspaces,
        clock,
        ids,
        policies,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(config: &AppConfig) -> Result<Repositories> {
    if let Some(url) = config.database_url() {
        let pool = database::init_pool(url).await?;
        database::run_migrations(&pool).await?;
        tracing::info!("using postgres document store");
        return Ok(Repositories {
            contents: Arc::new(PostgresContentRepository::new(pool.clone())),
            definitions: Arc::new(PostgresContentDefinitionRepository::new(pool.clone())),
            workspaces: Arc::new(PostgresWorkspaceRepository::new(pool)),
        });
    }

    tracing::warn!("DATABASE_URL not set; content is kept in memory only");
    Ok(Repositories {
        contents: Arc::new(InMemoryContentRepository::new()),
        definitions: Arc::new(InMemoryContentDefinitionRepository::new()),
        workspaces: Arc::new(InMemoryWorkspaceRepository::new()),
    })
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
