//! Parse geocoding JSON into a GeocodeResult.

use serde::Deserialize;

use super::GeocodeResult;
use crate::error::MapError;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeEntry>,
}

#[derive(Debug, Deserialize)]
struct GeocodeEntry {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Extracts the first result's location when `status == "OK"`.
/// Unparseable bodies and empty result lists are also `LocationNotFound`.
pub fn parse_response(body: &[u8]) -> Result<GeocodeResult, MapError> {
    let resp: GeocodeResponse = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("unparseable geocoding response: {}", e);
        MapError::LocationNotFound {
            status: "INVALID_RESPONSE".to_string(),
        }
    })?;

    if resp.status != "OK" {
        return Err(MapError::LocationNotFound {
            status: resp.status,
        });
    }

    let first = resp
        .results
        .into_iter()
        .next()
        .ok_or_else(|| MapError::LocationNotFound {
            status: "OK (no results)".to_string(),
        })?;

    Ok(GeocodeResult {
        latitude: first.geometry.location.lat,
        longitude: first.geometry.location.lng,
    })
}
