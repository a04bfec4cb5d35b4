//! SeaORM Entity for named pricing rules
//!
//! Surcharges looked up by exact name ("Eggless", "Fondant_per_kg",
//! "Fondant_2_4kg", ...). The rule names present decide which icing
//! surcharge mode the pricing engine runs in.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extra_pricing_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub rule_name: String,
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
