//! `mapview menu` – print the root listing.

use anyhow::Result;
use mapview_core::config::MapviewConfig;

use super::route::route_with;
use crate::host::TerminalHost;

pub fn run_menu(cfg: &MapviewConfig) -> Result<bool> {
    route_with(cfg, &TerminalHost::new(), "")
}
