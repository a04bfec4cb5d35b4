//! Blob storage for uploaded cake reference images
//!
//! Thin client for a Supabase-style storage API: PUT the bytes into a public
//! bucket, hand back the public URL that goes into the configuration row.
//! The store itself is an external collaborator; nothing is kept locally.

use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Clone)]
pub struct StorageService {
    client: Client,
    base_url: String,
    bucket: String,
    api_key: String,
    enabled: bool,
}

impl StorageService {
    pub fn new(base_url: String, bucket: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        let enabled = !base_url.is_empty() && !api_key.is_empty();
        if !enabled {
            tracing::warn!("Image storage disabled (no STORAGE_URL/STORAGE_API_KEY configured)");
        }

        Self {
            client,
            base_url,
            bucket,
            api_key,
            enabled,
        }
    }

    /// Build from STORAGE_URL / STORAGE_BUCKET / STORAGE_API_KEY.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("STORAGE_URL").unwrap_or_default(),
            std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "cake-images".to_string()),
            std::env::var("STORAGE_API_KEY").unwrap_or_default(),
        )
    }

    /// Store an image and return its public URL.
    pub async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        if !self.enabled {
            return Err("image storage is not configured".into());
        }

        let upload_url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, file_name
        );

        let response = self
            .client
            .post(&upload_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", content_type.to_string())
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("storage upload failed with {status}: {error_text}").into());
        }

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, file_name
        ))
    }
}
