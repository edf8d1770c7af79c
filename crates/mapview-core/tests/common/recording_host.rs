//! Host double that records every call; same shape as the unit-test double
//! in `host.rs`, which integration tests cannot reach.

use mapview_core::host::{Host, MenuItem};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Notify(String, String),
    DialogOk(String, String),
    Keyboard(String),
    OpenSettings,
    Directory(Vec<MenuItem>, String),
    ShowPicture(PathBuf),
}

#[derive(Default)]
pub struct RecordingHost {
    pub calls: RefCell<Vec<HostCall>>,
    pub keyboard_input: RefCell<VecDeque<Option<String>>>,
}

impl RecordingHost {
    pub fn with_input(input: Option<&str>) -> Self {
        let host = Self::default();
        host.keyboard_input
            .borrow_mut()
            .push_back(input.map(str::to_string));
        host
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    /// Messages of every error notification, in order.
    pub fn notifications(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Notify(_, msg) => Some(msg),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn notify_error(&self, heading: &str, message: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::Notify(heading.into(), message.into()));
    }

    fn dialog_ok(&self, heading: &str, message: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::DialogOk(heading.into(), message.into()));
    }

    fn keyboard(&self, heading: &str) -> Option<String> {
        self.calls
            .borrow_mut()
            .push(HostCall::Keyboard(heading.into()));
        self.keyboard_input.borrow_mut().pop_front().flatten()
    }

    fn open_settings(&self) {
        self.calls.borrow_mut().push(HostCall::OpenSettings);
    }

    fn publish_directory(&self, items: &[MenuItem], content: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::Directory(items.to_vec(), content.into()));
    }

    fn show_picture(&self, path: &Path) {
        self.calls
            .borrow_mut()
            .push(HostCall::ShowPicture(path.to_path_buf()));
    }
}
