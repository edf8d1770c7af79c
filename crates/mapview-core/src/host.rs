//! Capabilities the embedding application provides to the plugin.
//!
//! The core never talks to a UI directly; the router, menu and display
//! orchestrator call through this trait so they run the same under a media
//! center, the terminal host, or a test double.

use std::path::Path;

/// One entry of a directory listing published to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub title: String,
    /// Plugin URL that re-invokes the router with this item's action.
    pub url: String,
    pub is_folder: bool,
}

pub trait Host {
    /// Transient error notification (heading + one line).
    fn notify_error(&self, heading: &str, message: &str);

    /// Modal dialog the user acknowledges.
    fn dialog_ok(&self, heading: &str, message: &str);

    /// Text prompt. `None` when the user cancels.
    fn keyboard(&self, heading: &str) -> Option<String>;

    fn open_settings(&self);

    /// Publishes a listing with its content type and ends the directory.
    fn publish_directory(&self, items: &[MenuItem], content: &str);

    /// Shows a picture stored on the local filesystem.
    fn show_picture(&self, path: &Path);
}
