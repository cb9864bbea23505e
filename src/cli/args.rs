//! CLI argument definitions and parsing structures.

use super::types::time::SeasonType;
use crate::core::config::{DEFAULT_DL_DIR, DEFAULT_REQUESTS_PER_MIN};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Season range and download options shared between commands
#[derive(Debug, Args)]
pub struct SeasonRange {
    /// First season year to fetch (e.g. 2021 for the 2021-22 season).
    pub start_year: u16,

    /// Last season year to fetch (inclusive); defaults to `start_year`.
    pub end_year: Option<u16>,

    /// Season type: Regular Season, Pre Season, Playoffs or All-Star.
    #[clap(long, short = 't', default_value_t = SeasonType::default())]
    pub season_type: SeasonType,

    /// Root directory for downloaded files.
    #[clap(long, default_value = DEFAULT_DL_DIR)]
    pub dl_dir: PathBuf,

    /// Re-download game logs even when a cached file exists
    /// (use for a season still in progress).
    #[clap(long)]
    pub refresh: bool,

    /// Request budget used to compute the post-request delay.
    #[clap(long, default_value_t = DEFAULT_REQUESTS_PER_MIN, value_parser = clap::value_parser!(u32).range(1..))]
    pub requests_per_min: u32,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-dl", about = "NBA stats downloader")]
pub struct NbaDl {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download team game logs for each team across a range of seasons.
    ///
    /// One CSV per team and season, e.g. `gamelogs_BOS_2021-22.csv`.
    Gamelogs {
        #[clap(flatten)]
        range: SeasonRange,
    },

    /// Download advanced box scores for every game in a range of seasons.
    ///
    /// Raw per-game JSON lands under `raw_gamedata/`; each season is also
    /// flattened into a single `boxscores_{year}.csv`.
    Boxscores {
        #[clap(flatten)]
        range: SeasonRange,
    },

    /// Download live play-by-play data for every game in a range of seasons.
    ///
    /// Raw per-game JSON lands under `raw_gamedata/`; each season is also
    /// flattened into a single `pbp_{year}.csv`.
    Pbp {
        #[clap(flatten)]
        range: SeasonRange,
    },
}
