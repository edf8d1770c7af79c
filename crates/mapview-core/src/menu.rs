//! Root listing of preset map views.

use crate::config::MapviewConfig;
use crate::host::MenuItem;
use crate::request::{encode_query, with_query, MapType};

/// Content type announced with the root listing.
pub const CONTENT_TYPE: &str = "images";

/// Builds a plugin URL that calls the router back with `params`.
pub fn plugin_url(base: &str, params: &[(&str, &str)]) -> String {
    with_query(base, &encode_query(params.iter().copied()))
}

fn item(label: String, title: String, url: String) -> MenuItem {
    MenuItem {
        label,
        title,
        url,
        is_folder: false,
    }
}

fn view_map_url(cfg: &MapviewConfig, map_type: MapType) -> String {
    let zoom = cfg.default_zoom().to_string();
    plugin_url(
        &cfg.plugin_url,
        &[
            ("action", "view_map"),
            ("location", cfg.default_location.as_str()),
            ("zoom", zoom.as_str()),
            ("map_type", map_type.as_str()),
        ],
    )
}

/// Default view, one entry per map type, then search and settings.
pub fn root_items(cfg: &MapviewConfig) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(MapType::ALL.len() + 3);

    items.push(item(
        "View Default Map".to_string(),
        "Default Map View".to_string(),
        view_map_url(cfg, cfg.default_map_type()),
    ));

    for map_type in MapType::ALL {
        items.push(item(
            format!("View {} Map", map_type.title()),
            format!("{} Map View", map_type.title()),
            view_map_url(cfg, map_type),
        ));
    }

    items.push(item(
        "Search Location".to_string(),
        "Search for a location".to_string(),
        plugin_url(&cfg.plugin_url, &[("action", "search")]),
    ));
    items.push(item(
        "Settings".to_string(),
        "Configure addon settings".to_string(),
        plugin_url(&cfg.plugin_url, &[("action", "settings")]),
    ));

    items
}
