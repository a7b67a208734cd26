use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    app_state::AppState,
    preview::{
        dtos::{ErrorResponse, LinkPreview, PreviewRequest},
        generate_preview,
    },
};

#[utoipa::path(
    post,
    path = "/link-preview",
    tag = "preview",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Preview metadata for the page", body = LinkPreview),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Preview generation failed", body = ErrorResponse)
    )
)]
pub async fn link_preview(
    State(state): State<AppState>,
    Json(payload): Json<PreviewRequest>,
) -> Response {
    if let Err(error) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    match generate_preview(state.fetcher.as_ref(), &payload.url).await {
        Ok(preview) => (StatusCode::OK, Json(preview)).into_response(),
        Err(error) => {
            // Precise cause goes to the log only; the response stays generic
            error!(url = %payload.url, %error, "Error fetching link preview");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal Server Error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
