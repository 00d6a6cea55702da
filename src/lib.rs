pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copy;
pub mod logging;
pub mod notification;
pub mod recording;
pub mod ui;
pub mod utils;
