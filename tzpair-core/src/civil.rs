//! Civil instants: wall-clock date/time fields with minute precision.
//!
//! A `CivilInstant` carries no zone of its own. It only means something
//! next to the `Zone` it was read in, so comparisons across zones always
//! go through an `AbsoluteInstant` first.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TzPairError, TzPairResult};

/// A point on the UTC timeline.
pub type AbsoluteInstant = DateTime<Utc>;

/// The datetime-local shape, used for both parsing and display.
const FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted years. Offset arithmetic near chrono's own limits would
/// overflow, so input stays within four-digit years.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

fn check_year(year: i32) -> TzPairResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TzPairError::InvalidInput(format!(
            "year {} is outside {:04}-{:04}",
            year, MIN_YEAR, MAX_YEAR
        )))
    }
}

/// Wall-clock (year, month, day, hour, minute) in some civil calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilInstant {
    datetime: NaiveDateTime,
}

impl CivilInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> TzPairResult<Self> {
        check_year(year)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TzPairError::InvalidInput(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            TzPairError::InvalidInput(format!("{hour:02}:{minute:02} is not a time of day"))
        })?;

        Ok(CivilInstant {
            datetime: date.and_time(time),
        })
    }

    /// Build from a naive datetime, dropping seconds and below.
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let truncated = datetime
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(datetime);

        CivilInstant {
            datetime: truncated,
        }
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Reinterpret the civil fields as if they were UTC.
    pub fn as_if_utc(&self) -> AbsoluteInstant {
        self.datetime.and_utc()
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }
}

impl FromStr for CivilInstant {
    type Err = TzPairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(TzPairError::InvalidInput("empty date/time".into()));
        }

        // "YYYY-MM-DD HH:MM" is accepted as well; a space in a chrono
        // format would also match no whitespace at all, so swap it here.
        let normalized = match input.split_once(' ') {
            Some((date, time)) if !input.contains('T') => format!("{date}T{time}"),
            _ => input.to_string(),
        };

        let datetime = NaiveDateTime::parse_from_str(&normalized, FORMAT).map_err(|_| {
            TzPairError::InvalidInput(format!("'{}'. Expected YYYY-MM-DDTHH:MM", input))
        })?;
        check_year(datetime.year())?;

        Ok(CivilInstant { datetime })
    }
}

impl fmt::Display for CivilInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format(FORMAT))
    }
}

impl TryFrom<String> for CivilInstant {
    type Error = TzPairError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CivilInstant> for String {
    fn from(value: CivilInstant) -> Self {
        value.to_string()
    }
}
