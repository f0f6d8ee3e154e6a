pub(crate) mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use nudgeboard_ai::PromptGenerator;
use nudgeboard_ai::gemini::GeminiClient;
use nudgeboard_data::{DashboardSource, MockDashboard};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;

pub(crate) struct AppState<G, D> {
    pub generator: Arc<G>,
    pub data: Arc<D>,
}

impl<G, D> Clone for AppState<G, D> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            data: Arc::clone(&self.data),
        }
    }
}

pub(crate) fn router<G, D>(state: AppState<G, D>) -> Router
where
    G: PromptGenerator + Send + Sync + 'static,
    D: DashboardSource + Send + Sync + 'static,
{
    // The static dashboard client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/generate-prompt",
            post(handlers::generate_prompt::<G, D>),
        )
        .route("/api/dashboard", get(handlers::dashboard::<G, D>))
        .with_state(state)
        .layer(cors)
}

pub(crate) fn healthcheck_router() -> Router {
    Router::new().route("/health", get(|| async { "OK" }))
}

pub(crate) async fn run(config: Config) -> anyhow::Result<()> {
    let generator = GeminiClient::new(&config.ai_config)?;
    let data = MockDashboard::new(&config.data_config);

    let state = AppState {
        generator: Arc::new(generator),
        data: Arc::new(data),
    };

    let health_listener = tokio::net::TcpListener::bind(config.healthcheck_addr).await?;
    tracing::info!(addr = %config.healthcheck_addr, "healthcheck listening");
    tokio::spawn(async move {
        axum::serve(health_listener, healthcheck_router())
            .await
            .expect("healthcheck server failed");
    });

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    tracing::info!(addr = %config.server_addr, "api listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::warn!("received shutdown signal");
        })
        .await?;

    Ok(())
}
