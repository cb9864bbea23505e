//! Pbp command: live play-by-play for every game in a season range.

use super::unique_game_ids;
use crate::cli::types::time::{SeasonType, SeasonYear};
use crate::core::table::Table;
use crate::error::Result;
use crate::nba::fetch::Downloader;
use tracing::{info, warn};

/// The live play-by-play endpoint is missing most files from before the
/// 2020-21 season.
const FIRST_PBP_SEASON: u16 = 2020;

/// For each season: load the season's game logs, fetch-or-load play-by-play
/// for every game, and write the flattened season table to `pbp_{year}.csv`.
pub async fn handle_pbp(
    downloader: &Downloader,
    years: &[SeasonYear],
    season_type: SeasonType,
    use_local: bool,
) -> Result<()> {
    for &year in years {
        if year.as_u16() < FIRST_PBP_SEASON {
            warn!(
                %year,
                "live play-by-play is unavailable before the 2020-21 season, skipping"
            );
            continue;
        }

        let gamelogs = downloader
            .fetch_season_gamelogs(year, season_type, use_local)
            .await?;
        let season_logs = Table::concat(gamelogs);
        let game_ids = unique_game_ids(&season_logs);
        if game_ids.is_empty() {
            warn!(%year, "no game logs available, skipping season");
            continue;
        }

        let pbp_tables = downloader.load_pbp_tables(&game_ids).await?;
        if pbp_tables.is_empty() {
            warn!(%year, "no play-by-play data collected, skipping season");
            continue;
        }

        let season_table = Table::concat(pbp_tables);
        let out_path = downloader.config().pbp_csv_path(year.as_u16());
        season_table.write_csv(&out_path)?;
        info!(
            %year,
            games = game_ids.len(),
            rows = season_table.rows.len(),
            file = %out_path.display(),
            "season play-by-play written"
        );
    }
    Ok(())
}
