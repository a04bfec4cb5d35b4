//! SeaORM Entity for placed orders
//!
//! One row per placed dine-in/takeaway order. Rows are never deleted;
//! lifecycle changes only touch `status`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Human-readable daily number, e.g. "20260801007" (date + 3-digit seq)
    #[sea_orm(unique)]
    pub order_number: String,
    pub name: String,
    pub phone: String,
    /// Dine-in table number, or "TakeAway" for parcel orders
    pub table_number: String,
    /// Ordered line items as submitted: [{id, name, price, qty, item_parcel?}]
    #[sea_orm(column_type = "JsonBinary")]
    pub items: Json,
    /// placed | preparing | ready | completed | cancelled
    pub status: String,
    /// Server-computed total, including parcel fees for takeaway
    pub total: Decimal,
    pub created_at: DateTimeWithTimeZone,
    /// Fixed to "pay-at-counter"; no payment processing happens here
    pub payment: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
