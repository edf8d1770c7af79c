//! CLI for the mapview plugin core.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mapview_core::config;
use mapview_core::request::MapType;

use commands::{run_config_path, run_menu, run_route, run_search, run_view};

/// Top-level CLI for mapview.
#[derive(Debug, Parser)]
#[command(name = "mapview")]
#[command(about = "mapview: browse and display Google static maps", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the plugin router with a host parameter string (e.g. "action=view_map&zoom=10").
    Route {
        /// URL-encoded parameters; empty lists the root menu.
        #[arg(default_value = "")]
        params: String,
    },

    /// Display a map (defaults come from the config file).
    View {
        /// Address or "lat,lng" to center on.
        #[arg(long)]
        location: Option<String>,
        /// Zoom level 0-21.
        #[arg(long)]
        zoom: Option<u8>,
        /// roadmap, satellite, hybrid or terrain.
        #[arg(long, value_parser = parse_map_type)]
        map_type: Option<MapType>,
    },

    /// Geocode a location and display it. Prompts on stdin when QUERY is omitted.
    Search {
        /// Free-text address, e.g. "Eiffel Tower, Paris".
        query: Option<String>,
    },

    /// Print the root listing of preset map views.
    Menu,

    /// Print the location of the config file.
    ConfigPath,
}

fn parse_map_type(s: &str) -> Result<MapType, String> {
    s.parse::<MapType>().map_err(|e| e.to_string())
}

impl CliCommand {
    /// Returns Ok(false) when the action failed after notifying the user.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        if let CliCommand::ConfigPath = cli.command {
            return run_config_path();
        }

        let cfg = config::load_or_init()?;
        tracing::debug!(
            default_location = cfg.default_location.as_str(),
            default_zoom = cfg.default_zoom,
            has_api_key = !cfg.api_key.trim().is_empty(),
            "loaded config"
        );

        match cli.command {
            CliCommand::Route { params } => run_route(&cfg, &params),
            CliCommand::View {
                location,
                zoom,
                map_type,
            } => run_view(&cfg, location.as_deref(), zoom, map_type),
            CliCommand::Search { query } => run_search(&cfg, query),
            CliCommand::Menu => run_menu(&cfg),
            CliCommand::ConfigPath => run_config_path(),
        }
    }
}
