//! Image service client.
//!
//! Thin HTTP wrapper around a photo listing endpoint that returns a JSON
//! array of records with a `url` field. Parsing is a pure function so it
//! can be tested without a network.

use std::time::Duration;

use async_trait::async_trait;
use canvas::image::ImageRecord;
use serde::Deserialize;
use tracing::debug;

use crate::config::FetchTimeouts;
use crate::error::HostError;

/// Longest error body kept in [`HostError::ApiResponse`].
pub const ERROR_BODY_MAX_CHARS: usize = 200;

/// Source of background images for new rectangles.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the full list of image records.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the request fails or the body is malformed.
    async fn fetch_images(&self) -> Result<Vec<ImageRecord>, HostError>;
}

pub struct PhotoClient {
    http: reqwest::Client,
    url: String,
}

impl PhotoClient {
    /// Build a client for `url` with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(url: String, timeouts: FetchTimeouts) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| HostError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl ImageSource for PhotoClient {
    async fn fetch_images(&self) -> Result<Vec<ImageRecord>, HostError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| HostError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| HostError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(HostError::ApiResponse { status, body: truncate_body(&text) });
        }

        parse_records(&text)
    }
}

/// Parse a photo listing body into image records.
///
/// Entries that are not records keep their slot with no URL, so one bad
/// entry does not discard the rest of the listing.
///
/// # Errors
///
/// Returns [`HostError::ApiParse`] if the body is not a JSON array.
pub fn parse_records(body: &str) -> Result<Vec<ImageRecord>, HostError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| HostError::ApiParse(e.to_string()))?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            ImageRecord::deserialize(entry).unwrap_or_else(|e| {
                debug!(index, error = %e, "image record without usable url");
                ImageRecord::default()
            })
        })
        .collect())
}

/// Cap an error body at [`ERROR_BODY_MAX_CHARS`] characters.
fn truncate_body(text: &str) -> String {
    match text.char_indices().nth(ERROR_BODY_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "photos_test.rs"]
mod tests;
