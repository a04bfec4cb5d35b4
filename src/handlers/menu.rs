use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder};

use crate::entities::{menu, prelude::*};
use crate::models::menu::GroupedMenu;
use crate::models::order::ErrorResponse;
use crate::AppState;

/// Available menu items grouped by category, each category sorted by name
pub async fn get_menu(
    State(state): State<AppState>,
) -> Result<Json<GroupedMenu>, (StatusCode, Json<ErrorResponse>)> {
    let items = Menu::find()
        .filter(menu::Column::IsAvailable.eq(true))
        .order_by(menu::Column::Category, Order::Asc)
        .order_by(menu::Column::Name, Order::Asc)
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

    let mut grouped = GroupedMenu::new();
    for item in items {
        grouped
            .entry(item.category.clone())
            .or_default()
            .push(item.into());
    }

    Ok(Json(grouped))
}
