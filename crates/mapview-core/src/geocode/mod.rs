//! Geocoder: free-text address to latitude/longitude.
//!
//! Any status other than "OK" is reported as `LocationNotFound`; the
//! geocoding API's finer distinctions (zero results, quota, bad request) are
//! only kept in the error for logging.

mod parse;

pub use parse::parse_response;

use std::fmt;

use crate::error::MapError;
use crate::http;
use crate::request::{encode_query, redact_key, with_query};

pub const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Coordinates of the first geocoding match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodeResult {
    /// `"lat,lng"` form accepted as a static map center.
    pub fn to_center(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeocodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    endpoint: String,
    api_key: String,
}

impl Geocoder {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn build_url(&self, address: &str) -> String {
        let query = encode_query([("address", address), ("key", self.api_key.as_str())]);
        with_query(&self.endpoint, &query)
    }

    /// Looks up `address`. A non-200 status is `MapError::Http`.
    pub fn geocode(&self, address: &str) -> Result<GeocodeResult, MapError> {
        let url = self.build_url(address);
        let resp = http::get(&url)?;
        if resp.status != 200 {
            tracing::error!(
                "Error geocoding via {}: {} - {}",
                redact_key(&url),
                resp.status,
                resp.text()
            );
            return Err(MapError::Http {
                status: resp.status,
                body: resp.text(),
            });
        }
        let result = parse_response(&resp.body)?;
        tracing::info!(address, lat = result.latitude, lng = result.longitude, "geocoded");
        Ok(result)
    }
}
