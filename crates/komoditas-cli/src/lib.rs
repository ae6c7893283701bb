//! CLI library components for the commodity dashboard.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
