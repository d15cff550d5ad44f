//! Zone identifiers and their offset rules.
//!
//! Rules come from the IANA database compiled into `chrono-tz`; nothing
//! here knows a DST rule of its own. A zone can also be given as an
//! explicit fixed offset such as `+05:30` or `UTC-04:00`.

use std::fmt;

use chrono::{Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::civil::AbsoluteInstant;
use crate::error::{TzPairError, TzPairResult};

/// Largest offset accepted for an explicit fixed zone, in minutes.
const MAX_FIXED_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoneRule {
    Fixed(i32),
    Iana(Tz),
}

/// A named civil time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: String,
    rule: ZoneRule,
}

impl Zone {
    /// Resolve a zone name: an IANA identifier or an explicit fixed offset.
    pub fn resolve(name: &str) -> TzPairResult<Self> {
        let trimmed = name.trim();

        if let Some(minutes) = parse_fixed_offset(trimmed) {
            return Ok(Zone::fixed(minutes));
        }

        let tz: Tz = trimmed
            .parse()
            .map_err(|_| TzPairError::UnknownZone(name.to_string()))?;

        Ok(Zone {
            name: tz.name().to_string(),
            rule: ZoneRule::Iana(tz),
        })
    }

    /// A zone with a constant offset and no DST.
    pub fn fixed(offset_minutes: i32) -> Self {
        Zone {
            name: format_offset(offset_minutes),
            rule: ZoneRule::Fixed(offset_minutes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// UTC offset in minutes at `instant`, positive east of UTC.
    pub fn offset_minutes_at(&self, instant: AbsoluteInstant) -> i32 {
        match self.rule {
            ZoneRule::Fixed(minutes) => minutes,
            ZoneRule::Iana(tz) => {
                tz.offset_from_utc_datetime(&instant.naive_utc())
                    .fix()
                    .local_minus_utc()
                    / 60
            }
        }
    }

    /// Standard (non-DST) offset in minutes in force at `instant`.
    pub fn standard_offset_minutes_at(&self, instant: AbsoluteInstant) -> i32 {
        match self.rule {
            ZoneRule::Fixed(minutes) => minutes,
            ZoneRule::Iana(tz) => tz
                .offset_from_utc_datetime(&instant.naive_utc())
                .base_utc_offset()
                .num_minutes() as i32,
        }
    }

    /// The zone's offset if it stays constant through the whole of `year`.
    ///
    /// The first instant of every month is sampled; a zone whose offset
    /// moves anywhere in between (DST or a rule change) returns `None`.
    pub fn fixed_offset_minutes(&self, year: i32) -> Option<i32> {
        if let ZoneRule::Fixed(minutes) = self.rule {
            return Some(minutes);
        }

        let mut offsets = (1..=12).map(|month| {
            Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
                .single()
                .map(|instant| self.offset_minutes_at(instant))
        });

        let first = offsets.next()??;
        for offset in offsets {
            if offset? != first {
                return None;
            }
        }

        Some(first)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Render an offset as `+HH:MM` / `-HH:MM`.
pub fn format_offset(minutes: i32) -> String {
    let sign = if minutes >= 0 { '+' } else { '-' };
    let abs = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

/// Parse `+HH:MM`, `-HH:MM`, `UTC+HH:MM` or `UTC-HH:MM` into minutes.
fn parse_fixed_offset(s: &str) -> Option<i32> {
    let s = s.strip_prefix("UTC").unwrap_or(s);

    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    let (hours, minutes) = rest.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    let total = hours * 60 + minutes;

    if minutes >= 60 || total > MAX_FIXED_OFFSET_MINUTES {
        return None;
    }

    Some(sign * total)
}
