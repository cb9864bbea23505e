//! The cache-or-fetch gate.
//!
//! Every download funnels through here: check the derived local path first,
//! reuse the file when permitted, otherwise fetch, persist, and throttle.
//! Fetch failures are logged and converted into an explicit no-data result;
//! calling loops treat absence as a skippable condition.

use crate::cli::types::ids::GameId;
use crate::cli::types::teams;
use crate::cli::types::time::{SeasonType, SeasonYear};
use crate::core::config::DownloadConfig;
use crate::core::paths::{
    csv_file_name, game_data_path, try_read_to_string, write_string, DataKind, GameDataKind,
};
use crate::core::table::Table;
use crate::error::{NbaError, Result};
use crate::nba::http::StatsClient;
use crate::nba::types::{PlayByPlayResponse, StatsResponse};
use serde_json::Value;
use tracing::{error, info, warn};

/// Sequential downloader over the NBA APIs with file-backed caching.
///
/// One request is outstanding at a time; a fixed delay follows each genuine
/// network call to respect the API's request quota. Cache hits skip the
/// delay. Each fetch-or-load call is independent and idempotent with respect
/// to the local cache.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: StatsClient,
    config: DownloadConfig,
}

impl Downloader {
    pub fn new(config: DownloadConfig) -> Result<Self> {
        Ok(Self {
            client: StatsClient::new()?,
            config,
        })
    }

    /// Construct with a preconfigured client (used by tests).
    pub fn with_client(config: DownloadConfig, client: StatsClient) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    async fn throttle(&self) {
        tokio::time::sleep(self.config.throttle_delay()).await;
    }

    /// Game logs for one team and season.
    ///
    /// When `use_local` is set and the derived CSV exists, the file is read
    /// back with no network call and no delay. Otherwise the logs are
    /// fetched, flattened, persisted, and the throttle delay applied.
    /// Returns `Ok(None)` after a logged fetch failure; an unknown team or
    /// data kind is a configuration error and surfaces as `Err`.
    pub async fn fetch_team_gamelogs(
        &self,
        team_abv: &str,
        season_year: SeasonYear,
        season_type: SeasonType,
        use_local: bool,
    ) -> Result<Option<Table>> {
        let team_id = teams::team_id(team_abv)?;
        let season_suffix = season_year.suffix();

        let fname = csv_file_name(
            DataKind::Gamelogs,
            &season_suffix,
            season_type,
            Some(team_abv),
        );
        let path = self.config.csv_path(&fname);

        if use_local && path.exists() {
            info!(team = team_abv, file = %path.display(), "reading local game logs");
            return Ok(Some(Table::read_csv(&path)?));
        }

        match self
            .download_team_gamelogs(team_id, team_abv, &season_suffix, season_type)
            .await
        {
            Ok(table) => {
                self.throttle().await;
                Ok(Some(table))
            }
            Err(e @ NbaError::UnknownDataKind { .. }) => Err(e),
            Err(e) => {
                error!(
                    team = team_abv,
                    season = %season_suffix,
                    error = %e,
                    "error getting game logs"
                );
                self.throttle().await;
                Ok(None)
            }
        }
    }

    async fn download_team_gamelogs(
        &self,
        team_id: u32,
        team_abv: &str,
        season_suffix: &str,
        season_type: SeasonType,
    ) -> Result<Table> {
        info!(team = team_abv, season = season_suffix, "downloading game logs");
        let payload = self
            .client
            .team_game_logs(team_id, season_suffix, season_type)
            .await?;
        let resp: StatsResponse = serde_json::from_value(payload)?;

        // The payload names its own kind; an unrecognized label is a
        // configuration error, not a fetch failure.
        let kind: DataKind = resp.resource.parse()?;

        let table = Table::from_result_sets(&resp.result_sets);
        if table.is_empty() {
            warn!(team = team_abv, season = season_suffix, "this appears to be an empty dataset");
        }

        let fname = csv_file_name(kind, season_suffix, season_type, Some(team_abv));
        table.write_csv(&self.config.csv_path(&fname))?;
        Ok(table)
    }

    /// Game logs for every team in a season. Teams with empty data or a
    /// failed fetch are skipped and logged, never fatal.
    pub async fn fetch_season_gamelogs(
        &self,
        season_year: SeasonYear,
        season_type: SeasonType,
        use_local: bool,
    ) -> Result<Vec<Table>> {
        let mut tables = Vec::new();
        for team_abv in teams::all_abbreviations() {
            match self
                .fetch_team_gamelogs(team_abv, season_year, season_type, use_local)
                .await?
            {
                Some(table) if !table.is_empty() => {
                    info!(team = team_abv, %season_year, %season_type, "fetched game logs");
                    tables.push(table);
                }
                Some(_) => {
                    warn!(team = team_abv, %season_year, %season_type, "no data found");
                }
                None => {
                    warn!(team = team_abv, %season_year, "skipping team after fetch failure");
                }
            }
        }
        Ok(tables)
    }

    /// Raw per-game payload (box score or play-by-play).
    ///
    /// An existing JSON file under `raw_gamedata/` is always reused; a miss
    /// fetches, persists the raw payload, and applies the throttle delay.
    /// Returns `Ok(None)` after a logged fetch failure.
    pub async fn fetch_game_data(
        &self,
        game_id: &GameId,
        kind: GameDataKind,
    ) -> Result<Option<Value>> {
        let path = game_data_path(&self.config.raw_dir(), game_id, kind);

        if let Some(text) = try_read_to_string(&path) {
            info!(game = %game_id, %kind, "JSON found for game, reading local file");
            return Ok(Some(serde_json::from_str(&text)?));
        }

        let game_id = game_id.normalize();
        info!(game = %game_id, %kind, "downloading game data");
        let result = match kind {
            GameDataKind::Boxscore => self.client.box_score_advanced(&game_id).await,
            GameDataKind::PlayByPlay => self.client.play_by_play(&game_id).await,
        };

        let content = match result {
            Ok(value) => {
                write_string(&path, &serde_json::to_string(&value)?)?;
                info!(game = %game_id, %kind, "got game data");
                Some(value)
            }
            Err(e) => {
                error!(game = %game_id, %kind, error = %e, "error getting game data");
                None
            }
        };
        self.throttle().await;
        Ok(content)
    }

    /// Fetch-or-load play-by-play for a list of games and flatten each into
    /// a table. Games with no data or an unexpected payload are skipped.
    pub async fn load_pbp_tables(&self, game_ids: &[GameId]) -> Result<Vec<Table>> {
        let mut tables = Vec::new();
        for game_id in game_ids {
            let Some(content) = self
                .fetch_game_data(game_id, GameDataKind::PlayByPlay)
                .await?
            else {
                continue;
            };
            match serde_json::from_value::<PlayByPlayResponse>(content) {
                Ok(resp) => tables.push(Table::from_actions(&resp.game)),
                Err(e) => {
                    warn!(game = %game_id, error = %e, "unexpected play-by-play payload, skipping");
                }
            }
        }
        Ok(tables)
    }
}
