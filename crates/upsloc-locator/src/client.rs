//! Locator operation: build, submit, gate, normalize.

use serde_json::Value;
use upsloc_core::{Address, AppConfig, SearchOptions, SearchRadius};

use crate::access::{AccessCredentials, TransactionReference};
use crate::error::LocatorError;
use crate::request::build_locator_request;
use crate::response::interpret_response;
use crate::transport::{HttpTransport, Transport};

/// Path of the Locator operation, appended to the gateway base URL.
pub const LOCATOR_ENDPOINT: &str = "/Locator";

/// Client for the Locator operation.
///
/// Holds no per-call state: every [`LocatorClient::search`] builds a fresh
/// document, submits it once, and returns either the normalized
/// `SearchResults` or a single error.
pub struct LocatorClient<T = HttpTransport> {
    transport: T,
    credentials: AccessCredentials,
    endpoint_url: String,
    customer_context: Option<String>,
}

impl LocatorClient<HttpTransport> {
    /// Creates a client from application configuration using the HTTP
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Http`] if the HTTP client cannot be built, or
    /// [`LocatorError::InvalidEndpoint`] if the configured base URL is not a
    /// valid URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, LocatorError> {
        let transport = HttpTransport::new(config.request_timeout_secs, &config.user_agent)?;
        let credentials =
            AccessCredentials::new(&config.access_key, &config.user_id, &config.password);
        let client = Self::with_transport(transport, credentials, &config.base_url)?;
        Ok(match &config.customer_context {
            Some(ctx) => client.with_customer_context(ctx),
            None => client,
        })
    }
}

impl<T: Transport> LocatorClient<T> {
    /// Creates a client over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::InvalidEndpoint`] if `base_url` joined with
    /// [`LOCATOR_ENDPOINT`] is not a valid URL.
    pub fn with_transport(
        transport: T,
        credentials: AccessCredentials,
        base_url: &str,
    ) -> Result<Self, LocatorError> {
        let endpoint_url = format!("{}{LOCATOR_ENDPOINT}", base_url.trim_end_matches('/'));
        reqwest::Url::parse(&endpoint_url).map_err(|e| LocatorError::InvalidEndpoint {
            url: endpoint_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            transport,
            credentials,
            endpoint_url,
            customer_context: None,
        })
    }

    /// Uses a fixed `CustomerContext` instead of a random one per call.
    #[must_use]
    pub fn with_customer_context(mut self, customer_context: impl Into<String>) -> Self {
        self.customer_context = Some(customer_context.into());
        self
    }

    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    fn transaction_reference(&self) -> TransactionReference {
        self.customer_context
            .as_deref()
            .map_or_else(TransactionReference::generate, TransactionReference::new)
    }

    /// Renders the request document [`LocatorClient::search`] would submit,
    /// without any I/O.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Encode`] if the document cannot be written.
    pub fn render_request(
        &self,
        address: &Address,
        radius: &SearchRadius,
        options: &SearchOptions,
    ) -> Result<String, LocatorError> {
        build_locator_request(&self.transaction_reference(), address, radius, options)
    }

    /// Searches for locations around `address` within `radius`.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::Unknown`] if the endpoint returned no document.
    /// - [`LocatorError::Vendor`] if the endpoint reported a failure.
    /// - [`LocatorError::Http`], [`LocatorError::Xml`] or
    ///   [`LocatorError::MalformedResponse`] on transport or parse failure.
    /// - [`LocatorError::Encode`] if a request document cannot be written.
    pub async fn search(
        &self,
        address: &Address,
        radius: &SearchRadius,
        options: &SearchOptions,
    ) -> Result<Value, LocatorError> {
        let access = self.credentials.to_xml()?;
        let request = self.render_request(address, radius, options)?;

        tracing::debug!(
            endpoint = %self.endpoint_url,
            radius = radius.radius(),
            unit = %radius.unit(),
            max_list_size = options.max_list_size,
            "submitting Locator request"
        );

        let raw = self
            .transport
            .submit(&access, &request, &self.endpoint_url)
            .await?;

        interpret_response(raw.as_deref()).inspect_err(|err| {
            if let LocatorError::Vendor { severity, .. } = err {
                tracing::warn!(
                    code = err.code(),
                    severity = %severity,
                    error = %err,
                    "Locator request rejected"
                );
            } else {
                tracing::warn!(error = %err, "Locator response unusable");
            }
        })
    }
}
