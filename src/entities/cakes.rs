//! SeaORM Entity for saved cake configurations
//!
//! A configuration is a customer's cake design, saved before (and
//! independently of) any order. Re-saves update the row in place.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cakes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// 10-digit customer phone
    pub phone: String,
    /// Client-computed total as submitted (not re-derived server-side)
    pub total_price: Decimal,
    pub reference_image_url: Option<String>,
    pub delivery_time: DateTimeWithTimeZone,
    /// Customization bundle: weightKg, icing, flavour, cakeType, shape,
    /// message, withEgg, photoCount, toys, flowers, chef_notes
    #[sea_orm(column_type = "JsonBinary")]
    pub customization: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
