pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod logging;
pub mod ticker;
