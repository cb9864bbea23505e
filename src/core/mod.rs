//! Core utilities for the NBA stats downloader
//!
//! This module consolidates the pieces every command relies on:
//! - `config`: explicit download configuration (no ambient globals)
//! - `paths`: deterministic cache file name and path derivation
//! - `table`: flat tabular data plus CSV reading/writing

pub mod config;
pub mod paths;
pub mod table;

// Re-export commonly used items for convenience
pub use config::DownloadConfig;
pub use paths::{csv_file_name, game_data_path, try_read_to_string, write_string};
pub use table::Table;
