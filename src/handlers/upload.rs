use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::models::order::ErrorResponse;
use crate::models::upload::{UploadRequest, UploadResponse};
use crate::AppState;

/// Store a reference image and return its public URL.
///
/// The configuration save itself does not depend on this succeeding: a
/// failed upload means the client saves with a null reference image.
pub async fn upload_image(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.data_url.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No image data provided".to_string(),
            }),
        ));
    }

    let decoded = request.decode().ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Malformed image data URL".to_string(),
            }),
        )
    })?;

    let file_name = format!("{}.{}", Uuid::new_v4(), decoded.extension);
    let content_type = format!("image/{}", decoded.extension);

    let url = state
        .storage
        .upload_image(&file_name, &content_type, decoded.bytes)
        .await
        .map_err(|e| {
            tracing::error!("Error uploading image: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to upload image.".to_string(),
                }),
            )
        })?;

    Ok(Json(UploadResponse { url }))
}
