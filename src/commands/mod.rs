//! Command implementations for the NBA stats downloader CLI

pub mod boxscores;
pub mod gamelogs;
pub mod pbp;

use crate::cli::types::ids::GameId;
use crate::cli::types::time::SeasonYear;
use crate::core::table::{Table, GAME_ID_COLUMN};
use crate::error::Result;
use std::collections::HashSet;

/// Validate a year range against the publication window and expand it to an
/// inclusive, sorted list of seasons. Data exists from the 1980-81 season
/// onward; the in-progress season is excluded.
pub fn validate_year_range(
    start_year: u16,
    end_year: Option<u16>,
    current_year: u16,
) -> Result<Vec<SeasonYear>> {
    let end_year = end_year.unwrap_or(start_year);
    SeasonYear::new(start_year).validate(current_year)?;
    SeasonYear::new(end_year).validate(current_year)?;

    let (lo, hi) = if start_year <= end_year {
        (start_year, end_year)
    } else {
        (end_year, start_year)
    };
    Ok((lo..=hi).map(SeasonYear::new).collect())
}

/// Unique game IDs from a game log table, in first-seen order. Game logs
/// list every game twice (once per team), so the duplicates are dropped
/// before any per-game downloads.
pub fn unique_game_ids(table: &Table) -> Vec<GameId> {
    let Some(ids) = table.column(GAME_ID_COLUMN) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| !id.is_empty() && seen.insert(id.to_string()))
        .map(GameId::from)
        .collect()
}
