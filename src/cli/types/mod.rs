//! Typed values shared between the CLI layer and the library

pub mod ids;
pub mod teams;
pub mod time;

pub use ids::GameId;
pub use time::{current_season_year, season_year_for, SeasonType, SeasonYear};
