use super::dto::{GenerateVideoRequest, GenerateVideoResponse};
use super::service::GenerationService;
use crate::common::response::{ApiError, ApiSuccess, ErrorBody};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{error, warn};

/// Generate a video from a script
///
/// Blocks until the provider has finished rendering, which can take minutes.
#[utoipa::path(
    post,
    path = "/api/generate-video",
    request_body = GenerateVideoRequest,
    responses(
        (status = 200, description = "Video generated", body = GenerateVideoResponse),
        (status = 400, description = "Script is missing or options are invalid", body = ErrorBody),
        (status = 405, description = "Method Not Allowed"),
        (status = 500, description = "Provider failure", body = ErrorBody)
    ),
    tag = "Generation"
)]
pub async fn generate_video(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let payload = match GenerateVideoRequest::from_body(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejected generation request: {}", e);
            return ApiError(e.to_string(), e.status_code()).into_response();
        }
    };

    match GenerationService::generate(state, payload).await {
        Ok(response) => ApiSuccess(response, StatusCode::OK).into_response(),
        Err(e) => {
            error!("Error in /api/generate-video: {}", e);
            ApiError(e.to_string(), e.status_code()).into_response()
        }
    }
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "Method Not Allowed",
    )
}
