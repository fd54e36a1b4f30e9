// Server module - router assembly and the serve loop used by main.rs

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::config::Config;
use crate::infrastructure::{AppState, db, seed};
use crate::modules::integrations::nyt_reviews::ReviewClient;

/// Build the full application router.
///
/// Anything no route claims is looked up under `static_dir`; whatever is not
/// there either is redirected to the home page.
pub fn build_router(state: AppState, static_dir: &str, cors_allowed_origins: &[String]) -> Router {
    let mut origins = Vec::new();
    for origin in cors_allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET]);

    let assets = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(api::redirect_home.into_service());

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::api_router(state))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Check prerequisites, connect, bind and serve until shutdown.
///
/// Fails closed: a missing API key or an unreachable datastore returns an
/// error before the listening port is bound.
pub async fn run(config: Config) -> Result<(), String> {
    let Some(api_key) = config.api_key.clone() else {
        return Err("API_KEY is not set; refusing to start".to_string());
    };

    tracing::info!("Connecting to database at {}", config.database_endpoint());
    let db = db::init_db(&config.database_url(), config.db_connection_limit)
        .await
        .map_err(|e| format!("Cannot ping database: {}", e))?;

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    let state = AppState::new(db, ReviewClient::new(&config.reviews_api_url, api_key));
    let app = build_router(state, &config.static_dir, &config.cors_allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!(
        "Application started on port {} at {}",
        config.port,
        chrono::Local::now().to_rfc2822()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
