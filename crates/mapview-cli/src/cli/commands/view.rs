//! `mapview view` – display one map.

use anyhow::Result;
use mapview_core::config::MapviewConfig;
use mapview_core::request::{encode_query, MapType};

use super::route::route_with;
use crate::host::TerminalHost;

pub fn run_view(
    cfg: &MapviewConfig,
    location: Option<&str>,
    zoom: Option<u8>,
    map_type: Option<MapType>,
) -> Result<bool> {
    route_with(cfg, &TerminalHost::new(), &view_params(location, zoom, map_type))
}

/// Parameter string for `action=view_map`; omitted values use config defaults.
pub(crate) fn view_params(
    location: Option<&str>,
    zoom: Option<u8>,
    map_type: Option<MapType>,
) -> String {
    let zoom = zoom.map(|z| z.to_string());
    let mut pairs = vec![("action", "view_map")];
    if let Some(l) = location {
        pairs.push(("location", l));
    }
    if let Some(z) = zoom.as_deref() {
        pairs.push(("zoom", z));
    }
    if let Some(t) = map_type {
        pairs.push(("map_type", t.as_str()));
    }
    encode_query(pairs)
}
