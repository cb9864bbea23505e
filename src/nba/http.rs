//! HTTP client for the NBA stats and live-data APIs.

use crate::cli::types::ids::GameId;
use crate::cli::types::time::SeasonType;
use crate::error::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT},
    Client,
};
use serde_json::Value;

/// Base path for stats.nba.com endpoints.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Base path for the live-data CDN (play-by-play).
pub const LIVE_BASE_URL: &str = "https://cdn.nba.com/static/json/liveData";

/// Client for the three endpoints this crate consumes. Treated as a black-box
/// request/response dependency: no retries, no custom timeout handling.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    stats_base: String,
    live_base: String,
}

impl StatsClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .default_headers(stats_headers()?)
            .build()?;
        Ok(Self {
            client,
            stats_base: STATS_BASE_URL.to_string(),
            live_base: LIVE_BASE_URL.to_string(),
        })
    }

    /// Override the base URLs (used by tests).
    pub fn with_base_urls(mut self, stats_base: &str, live_base: &str) -> Self {
        self.stats_base = stats_base.to_string();
        self.live_base = live_base.to_string();
        self
    }

    /// `GET /teamgamelogs` for one team, season, and season type.
    pub async fn team_game_logs(
        &self,
        team_id: u32,
        season_suffix: &str,
        season_type: SeasonType,
    ) -> Result<Value> {
        let url = format!("{}/teamgamelogs", self.stats_base);
        let params = [
            ("TeamID", team_id.to_string()),
            ("Season", season_suffix.to_string()),
            ("SeasonType", season_type.as_api_str().to_string()),
        ];

        let res = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    /// `GET /boxscoreadvancedv2` for one game.
    pub async fn box_score_advanced(&self, game_id: &GameId) -> Result<Value> {
        let url = format!("{}/boxscoreadvancedv2", self.stats_base);
        let params = [
            ("GameID", game_id.normalize().to_string()),
            ("StartPeriod", "0".to_string()),
            ("EndPeriod", "10".to_string()),
            ("StartRange", "0".to_string()),
            ("EndRange", "28800".to_string()),
            ("RangeType", "0".to_string()),
        ];

        let res = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    /// `GET /playbyplay/playbyplay_{game_id}.json` from the live-data CDN.
    pub async fn play_by_play(&self, game_id: &GameId) -> Result<Value> {
        let url = format!(
            "{}/playbyplay/playbyplay_{}.json",
            self.live_base,
            game_id.normalize()
        );

        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}

/// Header set stats.nba.com requires before it will answer.
fn stats_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        ),
    );
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert("Origin", HeaderValue::from_str("https://www.nba.com")?);
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    Ok(h)
}
