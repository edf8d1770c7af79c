//! Static map request model.
//!
//! A `MapRequest` is validated once at construction and immutable afterwards,
//! so the URL built from it is a pure function of its fields.

mod map_type;
mod query;

pub use map_type::MapType;
pub use query::{encode_query, parse_query, redact_key, with_query};

use crate::error::MapError;

/// Highest zoom level the static map endpoint accepts.
pub const MAX_ZOOM: u8 = 21;

/// Image size used when neither the caller nor the config picks one.
pub const DEFAULT_SIZE: &str = "800x600";

/// One static map to render: center, zoom, style and pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRequest {
    location: String,
    zoom: u8,
    map_type: MapType,
    size: String,
}

impl MapRequest {
    /// Builds a request. `location` is a free-form address or `"lat,lng"`.
    /// `size` must be `WIDTHxHEIGHT` with both dimensions positive.
    pub fn new(
        location: impl Into<String>,
        zoom: u8,
        map_type: MapType,
        size: impl Into<String>,
    ) -> Result<Self, MapError> {
        let size = size.into();
        if zoom > MAX_ZOOM {
            return Err(MapError::InvalidZoom(zoom));
        }
        if !is_valid_size(&size) {
            return Err(MapError::InvalidSize(size));
        }
        Ok(Self {
            location: location.into(),
            zoom,
            map_type,
            size,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn size(&self) -> &str {
        &self.size
    }
}

fn is_valid_size(size: &str) -> bool {
    let Some((w, h)) = size.split_once('x') else {
        return false;
    };
    matches!(
        (w.parse::<u32>(), h.parse::<u32>()),
        (Ok(w), Ok(h)) if w > 0 && h > 0
    )
}
