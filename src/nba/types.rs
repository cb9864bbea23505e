//! Wire types for NBA API payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope for stats.nba.com endpoints: a collection of named result sets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub resource: String,
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

/// One logical table: a header list plus a row matrix.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// Envelope for the live play-by-play endpoint, whose payload is a nested
/// `actions` list rather than result sets.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayByPlayResponse {
    pub game: PlayByPlayGame,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayByPlayGame {
    #[serde(rename = "gameId")]
    pub game_id: String,
    /// Event objects of no fixed schema; keys vary by action type.
    #[serde(default)]
    pub actions: Vec<Map<String, Value>>,
}
