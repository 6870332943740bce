use chrono::NaiveDate;
use chrono::format::ParseErrorKind;
use core::fmt;
use core::str::FromStr;
use thiserror::Error;

use crate::FEED_BASE_URL;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("date must be written as YYYY-MM-DD, got {0:?}")]
    Format(String),
    #[error("{0} is not a calendar date")]
    OutOfRange(String),
}

/// Calendar day of a daily puzzle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Address of this day's puzzle in the feed.
    pub fn feed_url(self) -> String {
        format!("{}/{}.json", FEED_BASE_URL, self)
    }
}

impl From<NaiveDate> for PuzzleDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PuzzleDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|err| match err.kind() {
                ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                    DateError::OutOfRange(s.to_owned())
                }
                _ => DateError::Format(s.to_owned()),
            })
    }
}
