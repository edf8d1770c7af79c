//! Plugin entry point: dispatch the host's parameter string to an action.
//!
//! Unknown or malformed parameters abort with `MapError::InvalidParams`
//! instead of being ignored; they indicate a broken link or a typo in an
//! action name, not a user error.

use std::path::PathBuf;

use crate::config::MapviewConfig;
use crate::display::DisplayOrchestrator;
use crate::error::MapError;
use crate::geocode::Geocoder;
use crate::host::Host;
use crate::menu;
use crate::request::{parse_query, MapType};
use crate::static_map::MapFetcher;

/// A decoded host invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No parameters: list the preset views.
    Menu,
    ViewMap {
        location: String,
        zoom: u8,
        map_type: MapType,
    },
    Search,
    Settings,
}

/// How a routed action ended. Failures have already been shown to the user.
#[derive(Debug)]
pub enum Outcome {
    Listed,
    Displayed(PathBuf),
    SettingsOpened,
    /// No API key; the user was sent to the settings.
    NeedsApiKey,
    /// The search prompt was dismissed or left empty.
    Cancelled,
    Failed(MapError),
}

/// Decodes `paramstring` (with or without a leading `?`), filling gaps from `cfg`.
pub fn parse_action(paramstring: &str, cfg: &MapviewConfig) -> Result<Action, MapError> {
    let raw = paramstring.strip_prefix('?').unwrap_or(paramstring);
    let params = parse_query(raw);
    if params.is_empty() {
        return Ok(Action::Menu);
    }

    let invalid = || MapError::InvalidParams(raw.to_string());
    let get = |name: &str| param(&params, name);

    match get("action").ok_or_else(invalid)? {
        "view_map" => {
            let location = get("location")
                .map(str::to_string)
                .unwrap_or_else(|| cfg.default_location.clone());
            let zoom = match get("zoom") {
                Some(z) => z.trim().parse::<u8>().map_err(|_| invalid())?,
                None => cfg.default_zoom(),
            };
            let map_type = match get("map_type") {
                Some(t) => t.parse::<MapType>().map_err(|_| invalid())?,
                None => cfg.default_map_type(),
            };
            Ok(Action::ViewMap {
                location,
                zoom,
                map_type,
            })
        }
        "search" => Ok(Action::Search),
        "settings" => Ok(Action::Settings),
        _ => Err(invalid()),
    }
}

/// Last value for `name`; a repeated key overrides earlier ones.
fn param<'p>(params: &'p [(String, String)], name: &str) -> Option<&'p str> {
    params
        .iter()
        .rfind(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

pub struct Router<'a, H: Host + ?Sized> {
    cfg: &'a MapviewConfig,
    host: &'a H,
}

impl<'a, H: Host + ?Sized> Router<'a, H> {
    pub fn new(cfg: &'a MapviewConfig, host: &'a H) -> Self {
        Self { cfg, host }
    }

    /// Runs one invocation. Only `InvalidParams` is returned as `Err`.
    pub fn route(&self, paramstring: &str) -> Result<Outcome, MapError> {
        let api_key = match self.cfg.api_key() {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!("{}", e);
                self.host.dialog_ok("API Key Required", e.user_message());
                self.host.open_settings();
                return Ok(Outcome::NeedsApiKey);
            }
        };

        let action = parse_action(paramstring, self.cfg)?;
        tracing::debug!(?action, "routing");

        let outcome = match action {
            Action::Menu => {
                let items = menu::root_items(self.cfg);
                self.host.publish_directory(&items, menu::CONTENT_TYPE);
                Outcome::Listed
            }
            Action::ViewMap {
                location,
                zoom,
                map_type,
            } => self.display(api_key, &location, zoom, map_type),
            Action::Search => self.search(api_key),
            Action::Settings => {
                self.host.open_settings();
                Outcome::SettingsOpened
            }
        };
        Ok(outcome)
    }

    fn orchestrator(&self, api_key: &str) -> DisplayOrchestrator<'a, H> {
        let fetcher = MapFetcher::new(self.cfg.static_map_endpoint(), api_key);
        DisplayOrchestrator::new(
            fetcher,
            self.host,
            self.cfg.image_size.as_str(),
            &self.cfg.temp_dir(),
        )
    }

    fn display(&self, api_key: &str, location: &str, zoom: u8, map_type: MapType) -> Outcome {
        match self.orchestrator(api_key).display_map(location, zoom, map_type) {
            Ok(path) => Outcome::Displayed(path),
            Err(e) => Outcome::Failed(e),
        }
    }

    fn search(&self, api_key: &str) -> Outcome {
        let term = match self.host.keyboard("Search Location") {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Outcome::Cancelled,
        };

        let geocoder = Geocoder::new(self.cfg.geocode_endpoint(), api_key);
        match geocoder.geocode(term.trim()) {
            Ok(found) => self.display(
                api_key,
                &found.to_center(),
                self.cfg.default_zoom(),
                self.cfg.default_map_type(),
            ),
            Err(e) => {
                tracing::warn!(term = term.as_str(), "search failed: {}", e);
                self.host.notify_error("Error", e.user_message());
                Outcome::Failed(e)
            }
        }
    }
}
