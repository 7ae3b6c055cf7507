//! Access credentials and transaction reference sent with every request.

use crate::error::LocatorError;
use crate::xml::DocumentWriter;

/// Account credentials rendered as the `AccessRequest` document that
/// precedes every request body.
#[derive(Clone)]
pub struct AccessCredentials {
    pub access_key: String,
    pub user_id: String,
    pub password: String,
}

impl AccessCredentials {
    #[must_use]
    pub fn new(
        access_key: impl Into<String>,
        user_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// Render the `AccessRequest` XML document.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Encode`] if the document cannot be written.
    pub fn to_xml(&self) -> Result<String, LocatorError> {
        let mut doc = DocumentWriter::new("AccessRequest")?;
        doc.open_with_lang("AccessRequest", "en-US")?;
        doc.leaf("AccessLicenseNumber", &self.access_key)?;
        doc.leaf("UserId", &self.user_id)?;
        doc.leaf("Password", &self.password)?;
        doc.close("AccessRequest")?;
        doc.finish()
    }
}

impl std::fmt::Debug for AccessCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessCredentials")
            .field("access_key", &"[redacted]")
            .field("user_id", &self.user_id)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Caller-chosen marker echoed back by the vendor in its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReference {
    pub customer_context: String,
}

impl TransactionReference {
    #[must_use]
    pub fn new(customer_context: impl Into<String>) -> Self {
        Self {
            customer_context: customer_context.into(),
        }
    }

    /// A reference with a fresh random context.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    pub(crate) fn write(&self, doc: &mut DocumentWriter) -> Result<(), LocatorError> {
        doc.open("TransactionReference")?;
        doc.leaf("CustomerContext", &self.customer_context)?;
        doc.close("TransactionReference")
    }
}
