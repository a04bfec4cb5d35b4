//! Cake configuration save/fetch models
//!
//! The save payload carries the client-computed price; the server stores it
//! as submitted. Order totals are server-computed, configuration totals are
//! not.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cake text is printed on the cake; keep it short
pub const MESSAGE_MAX_CHARS: usize = 40;
/// Internal chef notes, never shown to the customer
pub const CHEF_NOTES_MAX_CHARS: usize = 200;

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(r"^\d{10}$").unwrap();
}

/// One toy choice with its quantity (typed, not a free-form map)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToyCount {
    pub name: String,
    pub count: u32,
}

/// Full configuration save payload (create and update share it)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakePayload {
    pub name: String,
    pub phone: String,
    /// Client-computed total
    pub price: Decimal,
    #[serde(default)]
    pub reference_image: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<Decimal>,
    #[serde(default)]
    pub icing: Option<String>,
    #[serde(default)]
    pub flavour: Option<String>,
    #[serde(default)]
    pub cake_type: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub with_egg: bool,
    #[serde(default)]
    pub photo_count: u32,
    #[serde(default)]
    pub toys: Vec<ToyCount>,
    #[serde(default)]
    pub flowers: u32,
    pub delivery_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub chef_notes: Option<String>,
}

impl CakePayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if !PHONE_RE.is_match(&self.phone) {
            return Err("Phone must be exactly 10 digits".to_string());
        }
        if let Some(message) = &self.message {
            if message.chars().count() > MESSAGE_MAX_CHARS {
                return Err(format!("Message exceeds {MESSAGE_MAX_CHARS} characters"));
            }
        }
        if let Some(notes) = &self.chef_notes {
            if notes.chars().count() > CHEF_NOTES_MAX_CHARS {
                return Err(format!("Chef notes exceed {CHEF_NOTES_MAX_CHARS} characters"));
            }
        }
        Ok(())
    }

    /// The JSONB customization bundle stored alongside the row columns
    pub fn customization(&self) -> Customization {
        Customization {
            weight_kg: self.weight_kg,
            icing: self.icing.clone(),
            flavour: self.flavour.clone(),
            cake_type: self.cake_type.clone(),
            shape: self.shape.clone(),
            message: self.message.clone(),
            with_egg: self.with_egg,
            photo_count: self.photo_count,
            toys: self.toys.clone(),
            flowers: self.flowers,
            chef_notes: self.chef_notes.clone(),
        }
    }
}

/// Shape of the `customization` JSONB column
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    pub weight_kg: Option<Decimal>,
    pub icing: Option<String>,
    pub flavour: Option<String>,
    pub cake_type: Option<String>,
    pub shape: Option<String>,
    pub message: Option<String>,
    pub with_egg: bool,
    pub photo_count: u32,
    pub toys: Vec<ToyCount>,
    pub flowers: u32,
    /// Kept under a snake_case key for compatibility with stored rows
    #[serde(rename = "chef_notes")]
    pub chef_notes: Option<String>,
}

/// Query params for PUT/GET /api/cakes
#[derive(Debug, Clone, Deserialize)]
pub struct CakeQueryParams {
    pub id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CakeSaveResponse {
    pub id: Uuid,
}
