//! SeaORM Entity for selectable cake attribute values
//!
//! `(option_type, option_name)` is unique. Seeded by migration and maintained
//! by admin tooling; read-only to this service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cake_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Open enumeration: weight, icing, flavor, cake_type, shape, toy,
    /// flower, photos
    pub option_type: String,
    pub option_name: String,
    pub base_price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
