use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{orders, prelude::*};
use crate::models::order::{
    CancelOrderParams, CancelOrderResponse, ErrorResponse, PlaceOrderRequest, PlaceOrderResponse,
    SearchOrderParams, SearchOrderResponse,
};
use crate::services::order_lifecycle::{
    cancellation_decision, CancellationDecision, OrderLocator, OrderStatus,
};
use crate::services::order_number::allocate_order_number;
use crate::AppState;

const PAYMENT_MODE: &str = "pay-at-counter";

/// Datastore details stay in the log; the client gets a generic message.
fn db_error(e: sea_orm::DbErr) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Database error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Something went wrong".to_string(),
        }),
    )
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<PlaceOrderResponse>), (StatusCode, Json<ErrorResponse>)> {
    if payload.items.is_empty() {
        return Err(bad_request("Items are required"));
    }
    if payload.name.trim().is_empty() {
        return Err(bad_request("Name is required"));
    }

    // Server-side total is authoritative for orders
    let total = payload.computed_total();

    // UTC date keys the daily counter; midnight continuity follows UTC
    let today = Utc::now().date_naive();
    let allocated = allocate_order_number(&state.db, today).await.map_err(|e| {
        tracing::error!("Failed to get or create counter: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Could not generate order number".to_string(),
            }),
        )
    })?;

    let items = serde_json::to_value(&payload.items).map_err(|e| {
        tracing::error!("Failed to serialize order items: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Could not place order".to_string(),
            }),
        )
    })?;

    let new_order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        order_number: Set(allocated.order_number.clone()),
        name: Set(payload.name.clone()),
        phone: Set(payload.phone.clone()),
        table_number: Set(payload.table_number.clone()),
        items: Set(items),
        status: Set(OrderStatus::Placed.as_str().to_string()),
        total: Set(total),
        created_at: Set(Utc::now().into()),
        payment: Set(PAYMENT_MODE.to_string()),
    };

    // If this insert fails the allocated number is burned: a gap in the
    // day's sequence, never a duplicate.
    let inserted = new_order.insert(&state.db).await.map_err(|e| {
        tracing::error!("Failed to place order {}: {}", allocated.order_number, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Could not place order".to_string(),
            }),
        )
    })?;

    // Best-effort staff notification; the order is already committed
    let notifier = state.notifier.clone();
    let order_id = inserted.id;
    let order_number = inserted.order_number.clone();
    let customer_name = inserted.name.clone();
    tokio::spawn(async move {
        notifier
            .notify_new_order(order_id, &order_number, &customer_name, total)
            .await;
    });

    Ok((
        StatusCode::CREATED,
        Json(PlaceOrderResponse {
            id: inserted.id,
            order_number: inserted.order_number,
        }),
    ))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Query(params): Query<CancelOrderParams>,
) -> Result<Json<CancelOrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let raw = params.id.ok_or_else(|| bad_request("Missing id"))?;
    let locator =
        OrderLocator::parse(&raw).ok_or_else(|| bad_request("Invalid order ID format."))?;

    let order = match locator {
        OrderLocator::Id(id) => Orders::find_by_id(id).one(&state.db).await,
        OrderLocator::Number(number) => {
            // Global lookup: the date prefix makes order numbers unique
            // across days
            Orders::find()
                .filter(orders::Column::OrderNumber.eq(number))
                .one(&state.db)
                .await
        }
    }
    .map_err(db_error)?
    .ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Not found".to_string(),
            }),
        )
    })?;

    let decision = match OrderStatus::from_str(&order.status) {
        Some(status) => {
            cancellation_decision(status, order.created_at.with_timezone(&Utc), Utc::now())
        }
        None => CancellationDecision::NotCancellable,
    };

    match decision {
        CancellationDecision::Allowed => {}
        CancellationDecision::WindowExpired => {
            return Err(bad_request("Cancellation window expired"));
        }
        CancellationDecision::NotCancellable => {
            return Err(bad_request("Order can no longer be cancelled"));
        }
    }

    let mut active = order.into_active_model();
    active.status = Set(OrderStatus::Cancelled.as_str().to_string());
    active.update(&state.db).await.map_err(db_error)?;

    Ok(Json(CancelOrderResponse { ok: true }))
}

pub async fn search_order(
    State(state): State<AppState>,
    Query(params): Query<SearchOrderParams>,
) -> Result<Json<SearchOrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (Some(order_number), Some(phone_number), Some(date)) =
        (params.order_number, params.phone_number, params.date)
    else {
        return Err(bad_request("Missing required search parameters."));
    };

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| bad_request("Invalid date format, expected YYYY-MM-DD"))?;
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1);

    // All three must match the same order on that UTC calendar date
    let matches = Orders::find()
        .filter(orders::Column::OrderNumber.eq(&order_number))
        .filter(orders::Column::Phone.eq(&phone_number))
        .filter(orders::Column::CreatedAt.gte(start))
        .filter(orders::Column::CreatedAt.lt(end))
        .limit(2)
        .all(&state.db)
        .await
        .map_err(db_error)?;

    match matches.as_slice() {
        [order] => Ok(Json(SearchOrderResponse { id: order.id })),
        _ => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Order not found with the provided details.".to_string(),
            }),
        )),
    }
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<orders::Model>, (StatusCode, Json<ErrorResponse>)> {
    let order = Orders::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Order not found".to_string(),
                }),
            )
        })?;

    Ok(Json(order))
}
