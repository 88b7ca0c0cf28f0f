//! Structured error types for the voucher engine.
//!
//! Two tiers. [`VoucherError`] is what a build returns to its caller: bad
//! JSON input, or a layout/PDF failure nothing could recover from.
//! [`ImageError`] never leaves a build. Every call site that asks for an image
//! logs the error and draws a placeholder instead.

use thiserror::Error;

/// The unified error type returned by all public build functions.
#[derive(Debug, Error)]
pub enum VoucherError {
    /// JSON input failed to parse as a reservation or agency config.
    #[error("Failed to parse {what}: {source}{}", hint_suffix(.hint))]
    ParseError {
        what: &'static str,
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// Layout or PDF generation failed.
    #[error("Render error: {0}")]
    RenderError(String),
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl VoucherError {
    /// Wrap a serde_json error, attaching a hint based on its category.
    pub fn parse(what: &'static str, e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the reservation schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        VoucherError::ParseError { what, source: e, hint }
    }
}

impl From<serde_json::Error> for VoucherError {
    fn from(e: serde_json::Error) -> Self {
        VoucherError::parse("document", e)
    }
}

/// Why an image reference could not be turned into an embeddable image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("HTTP request for '{url}' failed: {message}")]
    Fetch { url: String, message: String },
    #[error("Failed to read image '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Invalid data URI: {0}")]
    DataUri(&'static str),
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Unsupported image format (expected JPEG, PNG or WebP)")]
    UnsupportedFormat,
    #[error("Site-relative image '{0}' but no site root is configured")]
    NoSiteRoot(String),
    #[error("Site-relative image '{0}' points outside the site root")]
    OutsideSiteRoot(String),
    #[error("Image data too short")]
    TooShort,
}
