use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pastry_backend::handlers::{cake, menu, offer, order, pricing, upload};
use pastry_backend::services::{notification::NotificationService, storage::StorageService};
use pastry_backend::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pastry_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        db,
        notifier: NotificationService::from_env(),
        storage: StorageService::from_env(),
    };

    // Build router
    let app = Router::new()
        .route("/", get(hello_bakery))
        .route("/api/orders", post(order::place_order))
        .route("/api/orders/cancel", post(order::cancel_order))
        .route("/api/orders/search", get(order::search_order))
        .route("/api/orders/{id}", get(order::get_order))
        .route(
            "/api/cakes",
            post(cake::create_cake)
                .put(cake::update_cake)
                .get(cake::get_cake),
        )
        .route("/api/cakes/quote", post(pricing::quote_cake))
        .route("/api/cake-options", get(pricing::get_cake_options))
        .route("/api/pricing-rules", get(pricing::get_pricing_rules))
        .route("/api/menu", get(menu::get_menu))
        .route("/api/offers", get(offer::get_offers))
        .route("/api/upload", post(upload::upload_image))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

async fn hello_bakery() -> &'static str {
    "Hello from Pastry Backend! 🎂"
}
