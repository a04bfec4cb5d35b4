//! Menu listing models
//!
//! The listing normalizes nullable columns (missing description/image/stock
//! become empty string / placeholder / 0) and groups items by category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::entities::menu;

const PLACEHOLDER_IMAGE: &str = "/logo.png";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub diet: String,
    pub category: String,
    pub stock_quantity: i32,
    pub is_available: bool,
    pub parcel: Decimal,
}

impl From<menu::Model> for MenuItemResponse {
    fn from(item: menu::Model) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            description: item.description.unwrap_or_default(),
            image_url: item
                .image_url
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            diet: item.diet,
            category: item.category,
            stock_quantity: item.stock_quantity.unwrap_or(0),
            is_available: item.is_available,
            parcel: item.parcel.unwrap_or_default(),
        }
    }
}

/// Category name → items, ordered by category then item name
pub type GroupedMenu = BTreeMap<String, Vec<MenuItemResponse>>;
