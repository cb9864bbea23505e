//! Error types for the NBA stats downloader

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Unknown data kind: {kind}")]
    UnknownDataKind { kind: String },

    #[error("Unknown team abbreviation: {abbreviation}")]
    UnknownTeam { abbreviation: String },

    #[error("Invalid season type: {value}")]
    InvalidSeasonType { value: String },

    #[error("Year {year} is out of range (expected a year between 1981 and {max})")]
    YearOutOfRange { year: u16, max: u16 },
}
