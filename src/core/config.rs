//! Download configuration.
//!
//! Everything that used to be ambient (download directory, request budget,
//! default start year) is carried explicitly and handed to the downloader at
//! construction time.

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DL_DIR: &str = "dl_data";
pub const RAW_GAMEDATA_DIR: &str = "raw_gamedata";
pub const DEFAULT_REQUESTS_PER_MIN: u32 = 30;
pub const DEFAULT_START_YEAR: u16 = 2015;

#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Root directory for downloaded CSVs.
    pub dl_dir: PathBuf,
    /// Request budget; the post-request delay is `60s / requests_per_min`.
    pub requests_per_min: u32,
    /// Default starting year for multi-season operations.
    pub default_start_year: u16,
}

impl DownloadConfig {
    pub fn new(dl_dir: impl Into<PathBuf>) -> Self {
        Self {
            dl_dir: dl_dir.into(),
            requests_per_min: DEFAULT_REQUESTS_PER_MIN,
            default_start_year: DEFAULT_START_YEAR,
        }
    }

    pub fn with_requests_per_min(mut self, requests_per_min: u32) -> Self {
        self.requests_per_min = requests_per_min;
        self
    }

    /// Subdirectory holding raw per-game JSON payloads.
    pub fn raw_dir(&self) -> PathBuf {
        self.dl_dir.join(RAW_GAMEDATA_DIR)
    }

    /// Fixed delay applied after each genuine network call. A zero request
    /// budget is treated as one request per minute.
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_secs_f64(60.0 / self.requests_per_min.max(1) as f64)
    }

    /// Create the download and raw-data directories if missing.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.raw_dir())
    }

    pub fn csv_path(&self, file_name: &str) -> PathBuf {
        self.dl_dir.join(file_name)
    }

    /// Path of the per-season concatenated box score CSV.
    pub fn boxscores_csv_path(&self, year: u16) -> PathBuf {
        self.dl_dir.join(format!("boxscores_{}.csv", year))
    }

    /// Path of the per-season concatenated play-by-play CSV.
    pub fn pbp_csv_path(&self, year: u16) -> PathBuf {
        self.dl_dir.join(format!("pbp_{}.csv", year))
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_DL_DIR))
    }
}
