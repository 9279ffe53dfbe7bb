use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use myvoice::{DefaultBoards, WordList};

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod pages;
mod routes;
mod session;


use adapters::{InMemoryPhraseRepository, InMemorySettingsRepository};
use application::{CatalogService, PhraseService, SettingsService};
use config::ServerConfig;

/// Type aliases for application services with concrete repository implementations
pub type AppPhraseService = PhraseService<InMemoryPhraseRepository>;
pub type AppSettingsService = SettingsService<InMemorySettingsRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub phrase_service: Arc<AppPhraseService>,
    pub settings_service: Arc<AppSettingsService>,
    pub secure_cookie: bool,
}

impl AppState {
    /// Fresh process state: built-in catalog, empty Mine list and counters
    pub fn new(config: &ServerConfig) -> Self {
        let boards = Arc::new(DefaultBoards::builtin());
        let phrase_repo = Arc::new(InMemoryPhraseRepository::new());
        let settings_repo = Arc::new(InMemorySettingsRepository::new());

        Self {
            catalog: Arc::new(CatalogService::new(boards.clone(), WordList::builtin())),
            phrase_service: Arc::new(
                PhraseService::new(phrase_repo, boards)
                    .with_auto_save_threshold(config.auto_save_threshold),
            ),
            settings_service: Arc::new(SettingsService::new(settings_repo)),
            secure_cookie: config.secure_cookie,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "My Voice API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble every route, documentation and fallback into one router
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(routes::boards::router())
        .merge(routes::mine::router())
        .merge(routes::usage::router())
        .merge(routes::settings::router())
        .merge(routes::speech::router());

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(api_routes)
        .fallback(pages::not_found)
        .layer(CatchPanicLayer::custom(pages::internal_error))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("myvoice_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("🗣️  My Voice API initializing...");

    let config = ServerConfig::from_env().context("Failed to read server configuration")?;

    match config.auto_save_threshold {
        Some(threshold) => {
            tracing::info!("⭐ Auto-save to Mine after {} uses", threshold)
        }
        None => tracing::info!("Auto-save to Mine disabled"),
    }

    let router = build_router(AppState::new(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ My Voice API ready on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
