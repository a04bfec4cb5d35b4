//! Best-effort push notifications to staff devices
//!
//! Sends an FCM topic message after an order is durably placed. Dispatch is
//! fire-and-forget: failures are logged and dropped, and the request that
//! placed the order never waits on or fails because of this call.

use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

const REQUEST_TIMEOUT_SECS: u64 = 5;
const STAFF_TOPIC: &str = "store_orders";

#[derive(Clone)]
pub struct NotificationService {
    client: Client,
    endpoint: String,
    server_key: String,
    enabled: bool,
}

impl NotificationService {
    pub fn new(endpoint: String, server_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        let enabled = !endpoint.is_empty() && !server_key.is_empty();
        if !enabled {
            tracing::warn!("Push notifications disabled (no FCM endpoint/key configured)");
        }

        Self {
            client,
            endpoint,
            server_key,
            enabled,
        }
    }

    /// Build from FCM_ENDPOINT / FCM_SERVER_KEY; unset means disabled.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("FCM_ENDPOINT")
                .unwrap_or_else(|_| "https://fcm.googleapis.com/fcm/send".to_string()),
            std::env::var("FCM_SERVER_KEY").unwrap_or_default(),
        )
    }

    /// Announce a freshly placed order on the staff topic. Never returns an
    /// error; the order is already committed by the time this runs.
    pub async fn notify_new_order(
        &self,
        order_id: Uuid,
        order_number: &str,
        customer_name: &str,
        total: Decimal,
    ) {
        if !self.enabled {
            return;
        }

        let payload = json!({
            "to": format!("/topics/{STAFF_TOPIC}"),
            "notification": {
                "title": "New Order Received!",
                "body": format!("Order #{order_number} - {customer_name} (₹{total})"),
            },
            "data": {
                "orderId": order_id.to_string(),
                "orderNumber": order_number,
            },
        });

        let result = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("key={}", self.server_key))
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("Notified staff about order {}", order_number);
            }
            Ok(response) => {
                tracing::error!(
                    "Failed to send notification for order {}: HTTP {}",
                    order_number,
                    response.status()
                );
            }
            Err(e) => {
                tracing::error!(
                    "Failed to send notification for order {}: {}",
                    order_number,
                    e
                );
            }
        }
    }
}
