//! Response gate and result normalizer.

use serde_json::{Map, Value};

use crate::error::LocatorError;
use crate::xml::{parse_document, to_value, XmlElement};

/// Classify a parsed response document.
///
/// `None` means the transport produced nothing. A document whose
/// `Response/ResponseStatusCode` is numerically `0` is a vendor failure;
/// anything else passes through.
///
/// # Errors
///
/// - [`LocatorError::Unknown`] when `document` is `None`.
/// - [`LocatorError::Vendor`] when the status code is `0`.
pub fn check_response(document: Option<&XmlElement>) -> Result<&XmlElement, LocatorError> {
    let Some(document) = document else {
        return Err(LocatorError::Unknown);
    };

    let failed = document
        .text_at(&["Response", "ResponseStatusCode"])
        .and_then(|s| s.parse::<i64>().ok())
        == Some(0);

    if failed {
        let text = |field: &str| {
            document
                .text_at(&["Response", "Error", field])
                .unwrap_or_default()
                .to_string()
        };
        return Err(LocatorError::Vendor {
            code: coerce_code(&text("ErrorCode")),
            severity: text("ErrorSeverity"),
            description: text("ErrorDescription"),
        });
    }

    Ok(document)
}

/// Convert the `SearchResults` subtree of a successful response.
///
/// Nothing outside `SearchResults` is surfaced. A response without it
/// yields an empty object.
#[must_use]
pub fn normalize_search_results(document: &XmlElement) -> Value {
    document
        .child("SearchResults")
        .map_or_else(|| Value::Object(Map::new()), to_value)
}

/// Parse, gate and normalize a raw response body in one step.
///
/// # Errors
///
/// Returns [`LocatorError::Unknown`] for `None`, the parse errors of
/// [`parse_document`], or [`LocatorError::Vendor`] from [`check_response`].
pub fn interpret_response(raw: Option<&str>) -> Result<Value, LocatorError> {
    let document = raw.map(parse_document).transpose()?;
    let document = check_response(document.as_ref())?;
    Ok(normalize_search_results(document))
}

/// Integer value of a vendor error code: leading sign and digits after
/// trimming, `0` when there are none.
fn coerce_code(raw: &str) -> i64 {
    let raw = raw.trim();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    raw[..sign_len + digits].parse().unwrap_or(0)
}
