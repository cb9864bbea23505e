//! NBA Stats Downloader Library
//!
//! Fetches NBA statistics from the stats.nba.com and cdn.nba.com APIs, caches
//! the raw responses as local files, and reshapes them into flat CSV tables
//! for later analysis.
//!
//! ## Features
//!
//! - **Team Game Logs**: Per-team game logs for a season and season type
//! - **Advanced Box Scores**: Per-game advanced box score tables
//! - **Play-by-Play**: Per-game live play-by-play event streams
//! - **File Caching**: Deterministic file names per (kind, season, type, team);
//!   cached files are reused instead of re-downloading
//! - **Self-Throttling**: Fixed delay after each genuine network call to
//!   respect the API's request quota
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_dl::{DownloadConfig, Downloader, SeasonType, SeasonYear};
//!
//! # async fn example() -> nba_dl::Result<()> {
//! let config = DownloadConfig::default();
//! config.ensure_dirs()?;
//! let downloader = Downloader::new(config)?;
//!
//! // Reuses dl_data/gamelogs_BOS_2021-22.csv when present.
//! let logs = downloader
//!     .fetch_team_gamelogs("BOS", SeasonYear::new(2021), SeasonType::RegularSeason, true)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{GameId, SeasonType, SeasonYear};
pub use core::config::DownloadConfig;
pub use core::paths::{DataKind, GameDataKind};
pub use core::table::Table;
pub use error::{NbaError, Result};
pub use nba::fetch::Downloader;
