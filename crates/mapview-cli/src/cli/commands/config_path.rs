//! `mapview config-path` – where settings live.

use anyhow::Result;
use mapview_core::config;

pub fn run_config_path() -> Result<bool> {
    println!("{}", config::config_path()?.display());
    Ok(true)
}
