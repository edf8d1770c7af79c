//! `mapview search` – geocode and display.

use anyhow::Result;
use mapview_core::config::MapviewConfig;

use super::route::route_with;
use crate::host::TerminalHost;

pub fn run_search(cfg: &MapviewConfig, query: Option<String>) -> Result<bool> {
    let host = match query {
        Some(q) => TerminalHost::with_search_text(q),
        None => TerminalHost::new(),
    };
    route_with(cfg, &host, "action=search")
}
