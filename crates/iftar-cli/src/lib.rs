//! Library side of the `iftar-orders` command.

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod logging;
