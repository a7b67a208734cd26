use anyhow::Result;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use linkcard::{app_state::AppState, config::Config, health, preview};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, preview::handlers::link_preview),
    components(schemas(
        health::HealthResponse,
        preview::dtos::PreviewRequest,
        preview::dtos::LinkPreview,
        preview::dtos::ErrorResponse
    ))
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let state = AppState::new();

    let cors = if config.allowed_origin() == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin = config.allowed_origin().parse::<HeaderValue>()?;
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .route("/healthz", get(health::health_check))
        .route("/link-preview", post(preview::handlers::link_preview))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server is running on http://{}", config.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
