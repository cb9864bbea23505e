//! Command-line interface module

pub mod args;
pub mod types;

pub use args::{Commands, NbaDl, SeasonRange};
