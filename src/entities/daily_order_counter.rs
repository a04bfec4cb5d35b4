//! SeaORM Entity for the per-day order sequence counter
//!
//! One row per calendar date (UTC). `counter` holds the next sequence value
//! to hand out; allocation reads it and advances it with a conditional
//! update keyed on the date column.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_order_counter")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_date: Date,
    pub counter: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
