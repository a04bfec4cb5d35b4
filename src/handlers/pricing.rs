use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;

use crate::entities::{cake_options, extra_pricing_rules, prelude::*};
use crate::models::order::ErrorResponse;
use crate::models::pricing::{QuoteRequest, QuoteResponse};
use crate::services::pricing::{price_cake, PriceBook};
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

/// The option table the customization UI builds its selectors from
pub async fn get_cake_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<cake_options::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let options = CakeOptions::find().all(&state.db).await.map_err(db_error)?;
    Ok(Json(options))
}

pub async fn get_pricing_rules(
    State(state): State<AppState>,
) -> Result<Json<Vec<extra_pricing_rules::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rules = ExtraPricingRules::find()
        .all(&state.db)
        .await
        .map_err(db_error)?;
    Ok(Json(rules))
}

/// Server-side quote for a selection. Advisory: the configuration save path
/// stores whatever total the client submits, so this endpoint exists to keep
/// clients from reimplementing the rules, not to enforce them.
pub async fn quote_cake(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.weight_kg < Decimal::ZERO {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Weight must be non-negative".to_string(),
            }),
        ));
    }

    let options = CakeOptions::find().all(&state.db).await.map_err(db_error)?;
    let rules = ExtraPricingRules::find()
        .all(&state.db)
        .await
        .map_err(db_error)?;
    let book = PriceBook::from_rows(&options, &rules);

    // Toys are a typed selection: unknown names are a client error, not a
    // silently unpriced line
    for toy in &request.toys {
        if !book.has_option("toy", &toy.name) {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Unknown toy option: {}", toy.name),
                }),
            ));
        }
    }

    let quote = price_cake(&request.into_selection(), &book);

    Ok(Json(QuoteResponse {
        breakdown: quote.breakdown,
        total: quote.total,
    }))
}
