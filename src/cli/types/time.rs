//! Season-related types: season years and season types.

use crate::error::{NbaError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season's starting year (e.g. 2021 for the
/// 2021-22 season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeasonYear(pub u16);

impl SeasonYear {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Season suffix as used by the API, e.g. `2021` -> `"2021-22"`.
    ///
    /// Not meaningful for pre-2000 seasons where the short form wraps.
    pub fn suffix(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }

    /// Data is only published for seasons from 1980-81 onwards, and the
    /// current (in-progress) season is excluded.
    pub fn validate(&self, max: u16) -> Result<()> {
        if self.0 > 1980 && self.0 < max {
            Ok(())
        } else {
            Err(NbaError::YearOutOfRange { year: self.0, max })
        }
    }
}

impl fmt::Display for SeasonYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonYear {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Season year a given date falls in. Seasons straddle calendar years with an
/// August cutover: March 2022 is still part of the 2021-22 season, while
/// October 2022 belongs to 2022-23.
pub fn season_year_for(date: NaiveDate) -> u16 {
    let year = date.year() as u16;
    if date.month() <= 8 {
        year - 1
    } else {
        year
    }
}

/// Starting year of the season currently in progress.
pub fn current_season_year() -> u16 {
    season_year_for(Local::now().date_naive())
}

/// Season type as categorized by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    #[default]
    RegularSeason,
    PreSeason,
    Playoffs,
    AllStar,
}

impl SeasonType {
    /// Canonical label as the API expects it in query parameters.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::AllStar => "All-Star",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}

impl FromStr for SeasonType {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        // The upstream data uses inconsistent spellings ("Regular season",
        // "All Star"); accept them all, emit one canonical form.
        match s.to_lowercase().replace('-', " ").as_str() {
            "regular season" | "regular" => Ok(SeasonType::RegularSeason),
            "pre season" | "preseason" | "pre" => Ok(SeasonType::PreSeason),
            "playoffs" | "playoff" => Ok(SeasonType::Playoffs),
            "all star" | "allstar" => Ok(SeasonType::AllStar),
            _ => Err(NbaError::InvalidSeasonType {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_suffix() {
        assert_eq!(SeasonYear::new(2021).suffix(), "2021-22");
        assert_eq!(SeasonYear::new(2015).suffix(), "2015-16");
        assert_eq!(SeasonYear::new(1999).suffix(), "1999-00");
        assert_eq!(SeasonYear::new(2009).suffix(), "2009-10");
    }

    #[test]
    fn test_season_year_for_august_cutover() {
        // March 2022 is still the 2021-22 season
        let march = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        assert_eq!(season_year_for(march), 2021);

        // August is the last month counted against the previous season
        let august = NaiveDate::from_ymd_opt(2022, 8, 31).unwrap();
        assert_eq!(season_year_for(august), 2021);

        // September onward belongs to the new season
        let september = NaiveDate::from_ymd_opt(2022, 9, 1).unwrap();
        assert_eq!(season_year_for(september), 2022);

        let october = NaiveDate::from_ymd_opt(2022, 10, 20).unwrap();
        assert_eq!(season_year_for(october), 2022);
    }

    #[test]
    fn test_season_year_validate() {
        assert!(SeasonYear::new(2015).validate(2024).is_ok());
        assert!(SeasonYear::new(1981).validate(2024).is_ok());
        assert!(SeasonYear::new(2023).validate(2024).is_ok());

        // 1980 and earlier are out of range
        assert!(SeasonYear::new(1980).validate(2024).is_err());
        // The in-progress season is excluded
        assert!(SeasonYear::new(2024).validate(2024).is_err());
        assert!(SeasonYear::new(2030).validate(2024).is_err());
    }

    #[test]
    fn test_season_type_display() {
        assert_eq!(SeasonType::RegularSeason.to_string(), "Regular Season");
        assert_eq!(SeasonType::PreSeason.to_string(), "Pre Season");
        assert_eq!(SeasonType::Playoffs.to_string(), "Playoffs");
        assert_eq!(SeasonType::AllStar.to_string(), "All-Star");
    }

    #[test]
    fn test_season_type_from_str_spelling_variants() {
        assert_eq!(
            "Regular Season".parse::<SeasonType>().unwrap(),
            SeasonType::RegularSeason
        );
        assert_eq!(
            "Regular season".parse::<SeasonType>().unwrap(),
            SeasonType::RegularSeason
        );
        assert_eq!(
            "All-Star".parse::<SeasonType>().unwrap(),
            SeasonType::AllStar
        );
        assert_eq!(
            "All Star".parse::<SeasonType>().unwrap(),
            SeasonType::AllStar
        );
        assert_eq!(
            "playoffs".parse::<SeasonType>().unwrap(),
            SeasonType::Playoffs
        );

        assert!("Finals".parse::<SeasonType>().is_err());
    }
}
