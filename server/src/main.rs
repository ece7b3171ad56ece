mod api;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use fridgechef_core::ai::{AiClient, FakeClient, OpenRouterClient};
use fridgechef_core::calories::FixedCalorieEstimator;
use fridgechef_core::error::ConfigError;
use fridgechef_core::images::PlaceholderImageLookup;
use fridgechef_core::RecipePipeline;
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers
pub type AppState = Arc<RecipePipeline>;

fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the AI client from environment configuration.
///
/// `FRIDGECHEF_AI_PROVIDER` selects "openrouter" or "fake". The fake client
/// is the default so the server runs without credentials; it answers every
/// request with an empty suggestion list.
fn create_ai_client_from_env() -> Result<Arc<dyn AiClient>, ConfigError> {
    let provider = env::var("FRIDGECHEF_AI_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Arc::new(FakeClient::default())),
        "openrouter" => Ok(Arc::new(OpenRouterClient::from_env()?)),
        other => Err(ConfigError::UnknownProvider(other.to_string())),
    }
}

#[tokio::main]
async fn main() {
    init_telemetry();

    let ai = create_ai_client_from_env().expect("AI client configuration failed");
    let pipeline: AppState = Arc::new(RecipePipeline::new(
        ai,
        Arc::new(FixedCalorieEstimator::from_env()),
        Arc::new(PlaceholderImageLookup),
    ));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .merge(api::router())
        .merge(swagger_ui)
        .with_state(pipeline)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        );

    let bind_addr = env::var("FRIDGECHEF_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");

    axum::serve(listener, app).await.unwrap();
}
