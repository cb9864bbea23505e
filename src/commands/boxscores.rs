//! Boxscores command: advanced box scores for every game in a season range.

use super::unique_game_ids;
use crate::cli::types::time::{SeasonType, SeasonYear};
use crate::core::paths::GameDataKind;
use crate::core::table::Table;
use crate::error::Result;
use crate::nba::fetch::Downloader;
use crate::nba::types::StatsResponse;
use tracing::{info, warn};

/// For each season: load the season's game logs (cached where permitted),
/// fetch-or-load the advanced box score of every game, and write the
/// flattened season table to `boxscores_{year}.csv`. Games with no data are
/// skipped and logged.
pub async fn handle_boxscores(
    downloader: &Downloader,
    years: &[SeasonYear],
    season_type: SeasonType,
    use_local: bool,
) -> Result<()> {
    for &year in years {
        let gamelogs = downloader
            .fetch_season_gamelogs(year, season_type, use_local)
            .await?;
        let season_logs = Table::concat(gamelogs);
        let game_ids = unique_game_ids(&season_logs);
        if game_ids.is_empty() {
            warn!(%year, "no game logs available, skipping season");
            continue;
        }

        let mut box_tables = Vec::new();
        for game_id in &game_ids {
            let Some(content) = downloader
                .fetch_game_data(game_id, GameDataKind::Boxscore)
                .await?
            else {
                continue;
            };
            match serde_json::from_value::<StatsResponse>(content) {
                Ok(resp) => {
                    // The advanced box score's first result set holds the
                    // per-player table.
                    let Some(result_set) = resp.result_sets.first() else {
                        warn!(game = %game_id, "box score payload has no result sets, skipping");
                        continue;
                    };
                    box_tables.push(Table::from_result_sets(std::slice::from_ref(result_set)));
                }
                Err(e) => {
                    warn!(game = %game_id, error = %e, "unexpected box score payload, skipping");
                }
            }
        }

        if box_tables.is_empty() {
            warn!(%year, "no box score data collected, skipping season");
            continue;
        }

        let season_table = Table::concat(box_tables);
        let out_path = downloader.config().boxscores_csv_path(year.as_u16());
        season_table.write_csv(&out_path)?;
        info!(
            %year,
            games = game_ids.len(),
            rows = season_table.rows.len(),
            file = %out_path.display(),
            "season box scores written"
        );
    }
    Ok(())
}
