//! Library entry point for cnfmt: human-readable byte sizes and utility
//! class-name composition.

pub mod classes;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod utils;
