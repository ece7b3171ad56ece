use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use fridgechef_core::{GenerateError, GenerationRequest};
use utoipa::OpenApi;

/// Generate recipe suggestions from fridge ingredients
///
/// Stateless endpoint: takes a comma-separated free-text ingredient list and
/// returns recipe suggestions enriched with calorie estimates and image
/// URLs. Nothing is persisted server-side; per-recipe enrichment failures
/// degrade to absent fields rather than failing the request.
#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Enriched recipe suggestions", body = fridgechef_core::GenerationResult),
        (status = 422, description = "Invalid request (e.g. blank ingredient list)", body = ErrorResponse),
        (status = 502, description = "Generative output failed validation", body = ErrorResponse),
        (status = 503, description = "Generative capability unavailable", body = ErrorResponse)
    )
)]
pub async fn generate_recipes(
    State(pipeline): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> impl IntoResponse {
    match pipeline.generate(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(GenerateError::InvalidRequest(e)) => {
            tracing::warn!(error = %e, "rejected generation request");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(GenerateError::InvalidModelOutput(e)) => {
            tracing::warn!(error = %e, "generative output failed validation");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("recipe generation returned unusable data: {e}"),
                }),
            )
                .into_response()
        }
        Err(GenerateError::Upstream(e)) => {
            tracing::warn!(error = %e, "generative call failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: format!("recipe generation unavailable: {e}"),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(paths(generate_recipes))]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use crate::{api, AppState};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use fridgechef_core::ai::FakeClient;
    use fridgechef_core::calories::FixedCalorieEstimator;
    use fridgechef_core::images::PlaceholderImageLookup;
    use fridgechef_core::{GenerationResult, RecipePipeline};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(ai: FakeClient) -> axum::Router {
        let pipeline: AppState = Arc::new(RecipePipeline::new(
            Arc::new(ai),
            Arc::new(FixedCalorieEstimator),
            Arc::new(PlaceholderImageLookup),
        ));
        api::router().with_state(pipeline)
    }

    fn post_generate(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/recipes/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn returns_enriched_recipes() {
        let ai = FakeClient::with_response(
            "chicken",
            r#"{"recipes": [{"name": "Chicken Rice", "ingredients": [{"name": "chicken", "quantity": "1 lb"}], "instructions": "Cook."}]}"#,
        );
        let response = app(ai)
            .oneshot(post_generate(r#"{"ingredients": "chicken, rice"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let result: GenerationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].calories, Some(500));
        assert!(result.recipes[0].image_url.is_some());
    }

    #[tokio::test]
    async fn blank_ingredients_is_unprocessable() {
        let response = app(FakeClient::new())
            .oneshot(post_generate(r#"{"ingredients": "  "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn upstream_failure_is_service_unavailable() {
        // FakeClient::new() has no responses and no default, so the
        // generative call fails at the transport level.
        let response = app(FakeClient::new())
            .oneshot(post_generate(r#"{"ingredients": "chicken"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn unusable_model_output_is_bad_gateway() {
        let ai = FakeClient::with_response("chicken", "not json at all");
        let response = app(ai)
            .oneshot(post_generate(r#"{"ingredients": "chicken"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
