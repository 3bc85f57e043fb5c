//! Blocking HTTP client for the storefront backend.

use std::time::Duration;

use reqwest::blocking::Response;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Order, Product, Voucher};

/// A thin client over the storefront REST API.
///
/// Calls are synchronous; each returns the decoded response or an
/// [`ApiError`] that can be handed straight to the failure normalizer.
pub struct StorefrontClient {
    base_url: Url,
    http: reqwest::blocking::Client,
}

impl StorefrontClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)?;
        // Joining relative endpoint paths requires a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Fetches the product catalog.
    pub fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint("products")?;
        tracing::debug!(url = %url, "Listing products");

        let response = self.http.get(url).send()?;
        read_json(response)
    }

    /// Asks the backend to validate a voucher code.
    pub fn validate_voucher(&self, code: &str) -> Result<Voucher, ApiError> {
        let url = self.endpoint("vouchers/validate")?;
        tracing::debug!(url = %url, "Validating voucher");

        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "code": code }))
            .send()?;
        read_json(response)
    }

    /// Fetches the tracking state of an order.
    pub fn track_order(&self, order_id: u64) -> Result<Order, ApiError> {
        let url = self.endpoint(&format!("orders/{}", order_id))?;
        tracing::debug!(url = %url, "Tracking order");

        let response = self.http.get(url).send()?;
        read_json(response)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

/// Decodes a success response, or captures the raw body of a failure so the
/// normalizer can extract a validation message from it.
fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_else(|_| status.to_string());
        return Err(ApiError::Status { status, body });
    }

    Ok(response.json()?)
}
