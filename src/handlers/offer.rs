use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder};

use crate::entities::{offers, prelude::*};
use crate::models::order::ErrorResponse;
use crate::AppState;

/// Active offers, newest first
pub async fn get_offers(
    State(state): State<AppState>,
) -> Result<Json<Vec<offers::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let offers = Offers::find()
        .filter(offers::Column::IsActive.eq(true))
        .order_by(offers::Column::CreatedAt, Order::Desc)
        .all(&state.db)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Something went wrong".to_string(),
                }),
            )
        })?;

    Ok(Json(offers))
}
