//! Map Fetcher: static map URL building and response handling.

use crate::error::MapError;
use crate::http::{self, HttpResponse};
use crate::request::{encode_query, redact_key, with_query, MapRequest};

pub const STATIC_MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Raw bytes of one rendered map. Not cached; dropped after display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapImage(pub Vec<u8>);

impl MapImage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Fetches static map images for a fixed endpoint and API key.
#[derive(Debug, Clone)]
pub struct MapFetcher {
    endpoint: String,
    api_key: String,
}

impl MapFetcher {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Full GET URL with `center, zoom, size, maptype, key` in that order.
    pub fn build_url(&self, req: &MapRequest) -> String {
        let zoom = req.zoom().to_string();
        let query = encode_query([
            ("center", req.location()),
            ("zoom", zoom.as_str()),
            ("size", req.size()),
            ("maptype", req.map_type().as_str()),
            ("key", self.api_key.as_str()),
        ]);
        with_query(&self.endpoint, &query)
    }

    /// Single attempt; any status other than 200 is an error.
    pub fn fetch(&self, req: &MapRequest) -> Result<MapImage, MapError> {
        let url = self.build_url(req);
        let resp = http::get(&url)?;
        let image = interpret_response(resp).inspect_err(|e| {
            tracing::error!("Error getting map from {}: {}", redact_key(&url), e);
        })?;
        tracing::info!(
            location = req.location(),
            zoom = req.zoom(),
            map_type = %req.map_type(),
            bytes = image.0.len(),
            "static map fetched"
        );
        Ok(image)
    }
}

/// Maps a static map response to image bytes or `MapError::Http`.
pub fn interpret_response(resp: HttpResponse) -> Result<MapImage, MapError> {
    if resp.status == 200 {
        Ok(MapImage(resp.body))
    } else {
        Err(MapError::Http {
            status: resp.status,
            body: resp.text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{parse_query, MapType};

    fn fetcher() -> MapFetcher {
        MapFetcher::new(STATIC_MAP_ENDPOINT, "test-key")
    }

    #[test]
    fn build_url_matches_documented_example() {
        let req = MapRequest::new(
            "1600 Amphitheatre Parkway, Mountain View, CA",
            14,
            MapType::Satellite,
            "800x600",
        )
        .unwrap();
        assert_eq!(
            fetcher().build_url(&req),
            "https://maps.googleapis.com/maps/api/staticmap?\
             center=1600+Amphitheatre+Parkway%2C+Mountain+View%2C+CA\
             &zoom=14&size=800x600&maptype=satellite&key=test-key"
        );
    }

    #[test]
    fn build_url_has_exactly_five_parameters() {
        for map_type in MapType::ALL {
            for zoom in [0u8, 7, 21] {
                let req = MapRequest::new("40.7128,-74.006", zoom, map_type, "640x480").unwrap();
                let url = fetcher().build_url(&req);
                let (_, query) = url.split_once('?').unwrap();
                let pairs = parse_query(query);
                let zoom_str = zoom.to_string();
                let expected = [
                    ("center", "40.7128,-74.006"),
                    ("zoom", zoom_str.as_str()),
                    ("size", "640x480"),
                    ("maptype", map_type.as_str()),
                    ("key", "test-key"),
                ];
                assert_eq!(pairs.len(), expected.len());
                for ((k, v), (ek, ev)) in pairs.iter().zip(expected) {
                    assert_eq!(k, ek);
                    assert_eq!(v, ev);
                }
            }
        }
    }

    #[test]
    fn build_url_is_deterministic() {
        let req = MapRequest::new("Berlin", 11, MapType::Hybrid, "800x600").unwrap();
        let f = fetcher();
        assert_eq!(f.build_url(&req), f.build_url(&req.clone()));
    }

    #[test]
    fn interpret_200_returns_bytes() {
        let img = interpret_response(HttpResponse {
            status: 200,
            body: vec![1, 2, 3],
        })
        .unwrap();
        assert_eq!(img.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn interpret_403_is_http_error() {
        let err = interpret_response(HttpResponse {
            status: 403,
            body: b"The Google Maps Platform server rejected your request.".to_vec(),
        })
        .unwrap_err();
        match err {
            MapError::Http { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("rejected"));
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn interpret_other_2xx_is_still_an_error() {
        let err = interpret_response(HttpResponse {
            status: 204,
            body: Vec::new(),
        })
        .unwrap_err();
        assert!(matches!(err, MapError::Http { status: 204, .. }));
    }
}
