//! CLI command handlers.

mod config_path;
mod menu;
mod route;
mod search;
mod view;

pub use config_path::run_config_path;
pub use menu::run_menu;
pub use route::run_route;
pub use search::run_search;
pub use view::run_view;
