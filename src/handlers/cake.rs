use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use crate::entities::{cakes, prelude::*};
use crate::models::cake::{CakePayload, CakeQueryParams, CakeSaveResponse};
use crate::models::order::ErrorResponse;
use crate::AppState;

fn db_error(e: sea_orm::DbErr) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Database error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Something went wrong".to_string(),
        }),
    )
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Configuration not found.".to_string(),
        }),
    )
}

fn customization_json(
    payload: &CakePayload,
) -> Result<serde_json::Value, (StatusCode, Json<ErrorResponse>)> {
    serde_json::to_value(payload.customization()).map_err(|e| {
        tracing::error!("Failed to serialize customization: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save cake".to_string(),
            }),
        )
    })
}

/// Initial save of a configuration. The submitted price is stored as-is;
/// order totals are server-computed but configuration totals are not.
pub async fn create_cake(
    State(state): State<AppState>,
    Json(payload): Json<CakePayload>,
) -> Result<(StatusCode, Json<CakeSaveResponse>), (StatusCode, Json<ErrorResponse>)> {
    payload.validate().map_err(bad_request)?;
    let customization = customization_json(&payload)?;

    let new_cake = cakes::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.clone()),
        phone: Set(payload.phone.clone()),
        total_price: Set(payload.price),
        reference_image_url: Set(payload.reference_image.clone()),
        delivery_time: Set(payload.delivery_timestamp.into()),
        customization: Set(customization),
        created_at: Set(Utc::now().into()),
    };

    let inserted = new_cake.insert(&state.db).await.map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CakeSaveResponse { id: inserted.id }),
    ))
}

/// Re-save before final confirmation: update-by-id with the full payload
pub async fn update_cake(
    State(state): State<AppState>,
    Query(params): Query<CakeQueryParams>,
    Json(payload): Json<CakePayload>,
) -> Result<Json<CakeSaveResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = params
        .id
        .ok_or_else(|| bad_request("Missing configuration ID for update.".to_string()))?;
    payload.validate().map_err(bad_request)?;
    let customization = customization_json(&payload)?;

    let existing = Cakes::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(not_found)?;

    let mut active = existing.into_active_model();
    active.name = Set(payload.name.clone());
    active.phone = Set(payload.phone.clone());
    active.total_price = Set(payload.price);
    active.reference_image_url = Set(payload.reference_image.clone());
    active.delivery_time = Set(payload.delivery_timestamp.into());
    active.customization = Set(customization);
    active.update(&state.db).await.map_err(db_error)?;

    Ok(Json(CakeSaveResponse { id }))
}

pub async fn get_cake(
    State(state): State<AppState>,
    Query(params): Query<CakeQueryParams>,
) -> Result<Json<cakes::Model>, (StatusCode, Json<ErrorResponse>)> {
    let id = params
        .id
        .ok_or_else(|| bad_request("Missing configuration ID for fetch.".to_string()))?;

    let cake = Cakes::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(not_found)?;

    Ok(Json(cake))
}
