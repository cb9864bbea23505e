//! Deterministic cache file name and path derivation.
//!
//! Every cached file's name is a pure function of (data kind, season suffix,
//! season type, entity), so repeated runs resolve to the same paths.

use crate::cli::types::ids::GameId;
use crate::cli::types::time::SeasonType;
use crate::error::{NbaError, Result};
use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Kinds of tabular datasets saved as CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    PlayerList,
    Gamelogs,
    ProcessedPlays,
    ShotPlays,
}

impl DataKind {
    /// File name prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            DataKind::PlayerList => "common_all_players",
            DataKind::Gamelogs => "gamelogs",
            DataKind::ProcessedPlays => "proc_pbp",
            DataKind::ShotPlays => "shots_pbp",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for DataKind {
    type Err = NbaError;

    /// Accepts both our lookup keys and the `resource` labels the API uses.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pl_list" | "commonallplayers" => Ok(DataKind::PlayerList),
            "gamelogs" | "teamgamelogs" => Ok(DataKind::Gamelogs),
            "proc_pbp" => Ok(DataKind::ProcessedPlays),
            "shots_pbp" => Ok(DataKind::ShotPlays),
            _ => Err(NbaError::UnknownDataKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Derive the CSV file name for a dataset.
///
/// The season type Playoffs appends a `_playoffs` suffix; a present entity
/// (team abbreviation or similar set name) is inserted after the prefix.
/// Pure: identical inputs always yield an identical name.
pub fn csv_file_name(
    kind: DataKind,
    season_suffix: &str,
    season_type: SeasonType,
    entity: Option<&str>,
) -> String {
    let po_suffix = match season_type {
        SeasonType::Playoffs => "_playoffs",
        _ => "",
    };
    let entity_str = entity.map(|e| format!("{}_", e)).unwrap_or_default();

    format!(
        "{}_{}{}{}.csv",
        kind.prefix(),
        entity_str,
        season_suffix,
        po_suffix
    )
}

/// Kinds of raw per-game JSON payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameDataKind {
    Boxscore,
    PlayByPlay,
}

impl fmt::Display for GameDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameDataKind::Boxscore => "boxscore",
            GameDataKind::PlayByPlay => "pbp",
        };
        write!(f, "{}", s)
    }
}

/// Path of the raw JSON file for one game. The game ID is normalized first,
/// so prefixed and unprefixed forms of the same ID share one cache entry.
pub fn game_data_path(raw_dir: &Path, game_id: &GameId, kind: GameDataKind) -> PathBuf {
    raw_dir.join(format!("{}_{}.json", game_id.normalize(), kind))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
