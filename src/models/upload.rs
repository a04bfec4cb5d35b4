//! Reference-image upload models

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/upload: a browser-produced data URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub data_url: String,
}

/// A decoded `data:image/...;base64,` payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// File extension taken from the MIME subtype, e.g. "png"
    pub extension: String,
    pub bytes: Vec<u8>,
}

impl UploadRequest {
    /// Split and decode the data URL; None for anything that is not a
    /// well-formed base64 image payload.
    pub fn decode(&self) -> Option<DecodedImage> {
        let rest = self.data_url.strip_prefix("data:image/")?;
        let (extension, payload) = rest.split_once(";base64,")?;
        if extension.is_empty() || extension.contains('/') {
            return None;
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .ok()?;

        Some(DecodedImage {
            extension: extension.to_string(),
            bytes,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub url: String,
}
