//! Rendering style of a static map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapType {
    /// All variants in settings-index order (0 = roadmap .. 3 = terrain).
    pub const ALL: [MapType; 4] = [
        MapType::Roadmap,
        MapType::Satellite,
        MapType::Hybrid,
        MapType::Terrain,
    ];

    /// Value sent as the `maptype` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            MapType::Roadmap => "roadmap",
            MapType::Satellite => "satellite",
            MapType::Hybrid => "hybrid",
            MapType::Terrain => "terrain",
        }
    }

    /// Capitalized name for menu labels.
    pub fn title(self) -> &'static str {
        match self {
            MapType::Roadmap => "Roadmap",
            MapType::Satellite => "Satellite",
            MapType::Hybrid => "Hybrid",
            MapType::Terrain => "Terrain",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapType {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MapError::InvalidMapType(s.to_string()))
    }
}
