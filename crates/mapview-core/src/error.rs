//! Error kinds for a single plugin action.
//!
//! Every variant ends the current action. The component that owns the failing
//! step turns it into one host notification; `InvalidParams` is the exception
//! and propagates to the caller so integration mistakes abort loudly.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// No API key configured. The router prompts for settings instead of failing.
    #[error("no Google Maps API key configured")]
    MissingApiKey,

    /// Non-200 status from the static map or geocoding endpoint.
    #[error("HTTP {status}: {body}")]
    Http { status: u32, body: String },

    /// Geocoding status was anything other than "OK", or the payload was unusable.
    #[error("location not found (status {status})")]
    LocationNotFound { status: String },

    /// Returned bytes are not a decodable image.
    #[error("map image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),

    /// libcurl failed before a status line was received.
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("zoom {0} out of range 0..=21")]
    InvalidZoom(u8),

    #[error("invalid map size {0:?}, expected WIDTHxHEIGHT")]
    InvalidSize(String),

    #[error("unknown map type {0:?}")]
    InvalidMapType(String),

    /// Host parameters the router cannot dispatch.
    #[error("Invalid paramstring: {0}!")]
    InvalidParams(String),
}

impl MapError {
    /// Short text suitable for a host notification body.
    pub fn user_message(&self) -> &'static str {
        match self {
            MapError::MissingApiKey => "Please enter your Google Maps API Key in the addon settings.",
            MapError::LocationNotFound { .. } => "Location not found",
            _ => "Failed to retrieve map",
        }
    }
}
