//! Delivery of request documents to the vendor endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::LocatorError;

/// Sends an access document plus a request document to an endpoint and
/// returns the raw response body.
///
/// `Ok(None)` means the endpoint answered without a body.
pub trait Transport {
    fn submit(
        &self,
        access: &str,
        request: &str,
        endpoint_url: &str,
    ) -> impl Future<Output = Result<Option<String>, LocatorError>> + Send;
}

/// `reqwest`-backed transport for the XML gateway.
///
/// The body is the `AccessRequest` document immediately followed by the
/// operation document, posted in a single request.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the given total timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, LocatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn submit(
        &self,
        access: &str,
        request: &str,
        endpoint_url: &str,
    ) -> Result<Option<String>, LocatorError> {
        let mut body = String::with_capacity(access.len() + request.len());
        body.push_str(access);
        body.push_str(request);

        tracing::debug!(endpoint = endpoint_url, bytes = body.len(), "posting request");

        let response = self
            .client
            .post(endpoint_url)
            .header(reqwest::header::CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let response = response.error_for_status()?;
        let text = response.text().await?;

        tracing::debug!(
            endpoint = endpoint_url,
            status = status.as_u16(),
            bytes = text.len(),
            "received response"
        );

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }
}
