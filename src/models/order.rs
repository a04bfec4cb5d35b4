//! Order placement/cancel/search request and response models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic error body shared by all handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One cart line as submitted by the client. Key names match the stored
/// JSONB shape, so rows round-trip without mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    /// Unit price
    pub price: Decimal,
    pub qty: u32,
    /// Optional per-unit parcel fee, charged only on takeaway orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_parcel: Option<Decimal>,
}

/// Request to place a dine-in or takeaway order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub name: String,
    pub phone: String,
    /// Dine-in table number, or "TakeAway"
    pub table_number: String,
    #[serde(default)]
    pub is_parcel_order: bool,
    pub items: Vec<OrderItem>,
}

impl PlaceOrderRequest {
    /// Authoritative order total: Σ price×qty, plus Σ item_parcel×qty when
    /// this is a parcel order. The client's idea of the total is ignored.
    pub fn computed_total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| {
                let qty = Decimal::from(item.qty);
                let line = item.price * qty;
                let parcel_fee = if self.is_parcel_order {
                    item.item_parcel.unwrap_or_default() * qty
                } else {
                    Decimal::ZERO
                };
                line + parcel_fee
            })
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub id: Uuid,
    pub order_number: String,
}

/// Query params for POST /api/orders/cancel
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderParams {
    /// Row id (uuid) or bare order number (digits)
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderResponse {
    pub ok: bool,
}

/// Query params for GET /api/orders/search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOrderParams {
    pub order_number: Option<String>,
    pub phone_number: Option<String>,
    /// Calendar date, YYYY-MM-DD (UTC)
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOrderResponse {
    pub id: Uuid,
}
