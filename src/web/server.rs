use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::Stores;

use super::api::{events, recording, state as state_handlers};
use super::api_doc::ApiDoc;
use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<Stores>,
}

pub async fn run_server(config: Config, stores: Arc<Stores>) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let state = AppState { stores };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Snapshot accessors, one per entity
        .route("/api/state/airplane", get(state_handlers::airplane))
        .route("/api/state/environment", get(state_handlers::environment))
        .route("/api/state/simulator", get(state_handlers::simulator))
        .route("/api/status", get(state_handlers::status))
        // Recording control
        .route("/api/recording", get(recording::status))
        .route("/api/recording/start", post(recording::start))
        .route("/api/recording/stop", post(recording::stop))
        // Push stream
        .route("/api/events", get(events::events))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
