// src/lib.rs

use sea_orm::DatabaseConnection;
use services::{notification::NotificationService, storage::StorageService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub notifier: NotificationService,
    pub storage: StorageService,
}

pub mod entities {
    pub mod prelude;
    pub mod cake_options;
    pub mod cakes;
    pub mod daily_order_counter;
    pub mod extra_pricing_rules;
    pub mod menu;
    pub mod offers;
    pub mod orders;
}

pub mod services {
    pub mod notification;
    pub mod order_lifecycle;
    pub mod order_number;
    pub mod pricing;
    pub mod storage;
}

pub mod models;
pub mod handlers;
