pub mod config;
pub mod logging;

pub mod display;
pub mod error;
pub mod geocode;
pub mod host;
pub mod http;
pub mod menu;
pub mod request;
pub mod router;
pub mod static_map;

pub use error::MapError;
