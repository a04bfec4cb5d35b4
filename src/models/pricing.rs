//! Pricing quote request/response models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::cake::ToyCount;
use crate::services::pricing::{CakeSelection, PriceLine, ToySelection};

fn default_with_egg() -> bool {
    true
}

/// Request for POST /api/cakes/quote: the priceable subset of a
/// configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub weight_kg: Decimal,
    #[serde(default)]
    pub icing: Option<String>,
    #[serde(default)]
    pub flavour: Option<String>,
    #[serde(default)]
    pub cake_type: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default = "default_with_egg")]
    pub with_egg: bool,
    #[serde(default)]
    pub photo_count: u32,
    #[serde(default)]
    pub flowers: u32,
    #[serde(default)]
    pub toys: Vec<ToyCount>,
}

impl QuoteRequest {
    pub fn into_selection(self) -> CakeSelection {
        CakeSelection {
            weight_kg: self.weight_kg,
            icing: self.icing,
            flavour: self.flavour,
            cake_type: self.cake_type,
            shape: self.shape,
            with_egg: self.with_egg,
            photo_count: self.photo_count,
            flowers: self.flowers,
            toys: self
                .toys
                .into_iter()
                .map(|toy| ToySelection {
                    name: toy.name,
                    count: toy.count,
                })
                .collect(),
        }
    }
}

/// Advisory quote: what the engine says this selection costs right now.
/// The configuration save path still stores the client-submitted total.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub breakdown: Vec<PriceLine>,
    pub total: Decimal,
}
