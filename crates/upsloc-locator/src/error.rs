use thiserror::Error;

/// Errors returned by a Locator call.
///
/// [`LocatorError::Unknown`] and [`LocatorError::Vendor`] render the
/// `Failure (<severity>): <description>` message callers display; the other
/// variants come from the transport or document layers.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The transport produced no response document.
    #[error("Failure (0): Unknown error")]
    Unknown,

    /// The response reported `ResponseStatusCode` 0.
    #[error("Failure ({severity}): {description}")]
    Vendor {
        code: i64,
        severity: String,
        description: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed response document: {0}")]
    MalformedResponse(String),

    #[error("failed to encode {context}: {reason}")]
    Encode { context: String, reason: String },

    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl LocatorError {
    /// Numeric code for the failure: the vendor's error code for
    /// [`LocatorError::Vendor`], `0` for everything else.
    #[must_use]
    pub fn code(&self) -> i64 {
        match self {
            LocatorError::Vendor { code, .. } => *code,
            _ => 0,
        }
    }
}
