//! Gamelogs command: team game logs across a range of seasons.

use crate::cli::types::time::{SeasonType, SeasonYear};
use crate::error::Result;
use crate::nba::fetch::Downloader;
use tracing::info;

/// Fetch-or-load game logs for every team in each requested season. One CSV
/// per team and season lands under the download directory.
pub async fn handle_gamelogs(
    downloader: &Downloader,
    years: &[SeasonYear],
    season_type: SeasonType,
    use_local: bool,
) -> Result<()> {
    for &year in years {
        let tables = downloader
            .fetch_season_gamelogs(year, season_type, use_local)
            .await?;
        info!(
            %year,
            %season_type,
            teams = tables.len(),
            "season game logs complete"
        );
    }
    Ok(())
}
