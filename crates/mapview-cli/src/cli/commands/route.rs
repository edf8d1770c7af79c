//! `mapview route` – hand a raw parameter string to the router.

use anyhow::Result;
use mapview_core::config::MapviewConfig;
use mapview_core::router::{Outcome, Router};

use crate::host::TerminalHost;

pub fn run_route(cfg: &MapviewConfig, params: &str) -> Result<bool> {
    route_with(cfg, &TerminalHost::new(), params)
}

/// Routes `params` through `host` and reports whether the action succeeded.
pub(super) fn route_with(cfg: &MapviewConfig, host: &TerminalHost, params: &str) -> Result<bool> {
    let outcome = Router::new(cfg, host).route(params)?;
    tracing::debug!(?outcome, "route finished");
    Ok(!matches!(outcome, Outcome::Failed(_)))
}
