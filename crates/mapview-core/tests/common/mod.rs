#![allow(dead_code)]

pub mod map_server;
pub mod recording_host;
