//! Live offset and DST status of a zone, for display.

use std::fmt;

use chrono::Utc;
use serde::Serialize;

use crate::civil::AbsoluteInstant;
use crate::zone::{Zone, format_offset};

/// UTC offset of a zone at some instant and whether DST is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffsetStatus {
    pub offset_minutes: i32,
    pub is_dst: bool,
}

impl OffsetStatus {
    /// Offset label, e.g. `+05:30`.
    pub fn offset_label(&self) -> String {
        format_offset(self.offset_minutes)
    }

    pub fn dst_badge(&self) -> &'static str {
        if self.is_dst { "DST ACTIVE" } else { "DST INACTIVE" }
    }
}

impl fmt::Display for OffsetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC{} ({})", self.offset_label(), self.dst_badge())
    }
}

/// Offset status of `zone` at `instant`.
///
/// DST counts as active whenever the offset in force differs from the
/// zone's standard offset at that instant.
pub fn offset_status_at(zone: &Zone, instant: AbsoluteInstant) -> OffsetStatus {
    let offset_minutes = zone.offset_minutes_at(instant);
    let standard = zone.standard_offset_minutes_at(instant);

    OffsetStatus {
        offset_minutes,
        is_dst: offset_minutes != standard,
    }
}

/// Offset status of `zone` right now.
pub fn current_offset_status(zone: &Zone) -> OffsetStatus {
    offset_status_at(zone, Utc::now())
}
