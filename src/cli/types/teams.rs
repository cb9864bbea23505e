//! Static NBA team table: abbreviation to league-assigned team ID.

use crate::error::{NbaError, Result};

/// All 30 current NBA teams.
pub const TEAMS: &[(&str, u32)] = &[
    ("ATL", 1610612737),
    ("BOS", 1610612738),
    ("BKN", 1610612751),
    ("CHA", 1610612766),
    ("CHI", 1610612741),
    ("CLE", 1610612739),
    ("DAL", 1610612742),
    ("DEN", 1610612743),
    ("DET", 1610612765),
    ("GSW", 1610612744),
    ("HOU", 1610612745),
    ("IND", 1610612754),
    ("LAC", 1610612746),
    ("LAL", 1610612747),
    ("MEM", 1610612763),
    ("MIA", 1610612748),
    ("MIL", 1610612749),
    ("MIN", 1610612750),
    ("NOP", 1610612740),
    ("NYK", 1610612752),
    ("OKC", 1610612760),
    ("ORL", 1610612753),
    ("PHI", 1610612755),
    ("PHX", 1610612756),
    ("POR", 1610612757),
    ("SAC", 1610612758),
    ("SAS", 1610612759),
    ("TOR", 1610612761),
    ("UTA", 1610612762),
    ("WAS", 1610612764),
];

/// Look up a team's numeric ID by its abbreviation (case-insensitive).
pub fn team_id(abbreviation: &str) -> Result<u32> {
    let upper = abbreviation.to_uppercase();
    TEAMS
        .iter()
        .find(|(abv, _)| *abv == upper)
        .map(|(_, id)| *id)
        .ok_or(NbaError::UnknownTeam {
            abbreviation: abbreviation.to_string(),
        })
}

/// All team abbreviations, in table order.
pub fn all_abbreviations() -> impl Iterator<Item = &'static str> {
    TEAMS.iter().map(|(abv, _)| *abv)
}
