//! Terminal implementation of the plugin host.
//!
//! Notifications and dialogs go to stderr, listings and picture paths to
//! stdout, keyboard input comes from stdin.

use mapview_core::config;
use mapview_core::host::{Host, MenuItem};
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Default)]
pub struct TerminalHost {
    /// Answer for the next keyboard prompt instead of reading stdin.
    search_text: Option<String>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_text(text: String) -> Self {
        Self {
            search_text: Some(text),
        }
    }
}

impl Host for TerminalHost {
    fn notify_error(&self, heading: &str, message: &str) {
        eprintln!("{}: {}", heading, message);
    }

    fn dialog_ok(&self, heading: &str, message: &str) {
        eprintln!("== {} ==\n{}", heading, message);
    }

    fn keyboard(&self, heading: &str) -> Option<String> {
        if let Some(text) = &self.search_text {
            return Some(text.clone());
        }
        eprint!("{}: ", heading);
        let _ = io::stderr().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn open_settings(&self) {
        match config::config_path() {
            Ok(path) => eprintln!("Edit settings in {}", path.display()),
            Err(e) => eprintln!("Settings location unavailable: {:#}", e),
        }
    }

    fn publish_directory(&self, items: &[MenuItem], content: &str) {
        println!("{:<22} URL", format!("LABEL ({content})"));
        for item in items {
            println!("{:<22} {}", item.label, item.url);
        }
    }

    fn show_picture(&self, path: &Path) {
        println!("{}", path.display());
    }
}
