//! The two zones a converter session works between.

use chrono::Utc;

use crate::civil::{AbsoluteInstant, CivilInstant};
use crate::config::TzPairConfig;
use crate::convert::{convert, to_civil};
use crate::error::TzPairResult;
use crate::status::{OffsetStatus, offset_status_at};
use crate::zone::Zone;

/// A source/target zone pair, e.g. IST -> ET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonePair {
    pub source: Zone,
    pub target: Zone,
}

impl ZonePair {
    pub fn new(source: Zone, target: Zone) -> Self {
        ZonePair { source, target }
    }

    pub fn resolve(source: &str, target: &str) -> TzPairResult<Self> {
        Ok(ZonePair {
            source: Zone::resolve(source)?,
            target: Zone::resolve(target)?,
        })
    }

    pub fn from_config(config: &TzPairConfig) -> TzPairResult<Self> {
        Self::resolve(&config.source_zone, &config.target_zone)
    }

    /// Reverse the conversion direction.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    pub fn swapped(mut self) -> Self {
        self.swap();
        self
    }

    /// Civil time read in the source zone, shown in the target zone.
    pub fn convert_from_source(&self, civil: &CivilInstant) -> CivilInstant {
        convert(civil, &self.source, &self.target)
    }

    /// Civil time read in the target zone, shown in the source zone.
    pub fn convert_from_target(&self, civil: &CivilInstant) -> CivilInstant {
        convert(civil, &self.target, &self.source)
    }

    /// Civil time in (source, target) at `instant`.
    pub fn now_at(&self, instant: AbsoluteInstant) -> (CivilInstant, CivilInstant) {
        (to_civil(instant, &self.source), to_civil(instant, &self.target))
    }

    pub fn now(&self) -> (CivilInstant, CivilInstant) {
        self.now_at(Utc::now())
    }

    /// Offset status of (source, target) at `instant`.
    pub fn status_at(&self, instant: AbsoluteInstant) -> (OffsetStatus, OffsetStatus) {
        (
            offset_status_at(&self.source, instant),
            offset_status_at(&self.target, instant),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn civil(s: &str) -> CivilInstant {
        s.parse().unwrap()
    }

    fn ist_et() -> ZonePair {
        ZonePair::from_config(&TzPairConfig::default()).unwrap()
    }

    #[test]
    fn default_config_is_ist_to_et() {
        let pair = ist_et();
        assert_eq!(pair.source.name(), "Asia/Kolkata");
        assert_eq!(pair.target.name(), "America/New_York");
    }

    #[test]
    fn converts_both_directions() {
        let pair = ist_et();
        let et = pair.convert_from_source(&civil("2024-03-11T07:00"));
        assert_eq!(et, civil("2024-03-10T21:30"));
        assert_eq!(pair.convert_from_target(&et), civil("2024-03-11T07:00"));
    }

    #[test]
    fn swap_reverses_direction() {
        let mut pair = ist_et();
        pair.swap();
        assert_eq!(pair.source.name(), "America/New_York");
        assert_eq!(
            pair.convert_from_source(&civil("2024-03-09T20:30")),
            civil("2024-03-10T07:00")
        );
        assert_eq!(pair.swapped(), ist_et());
    }

    #[test]
    fn now_at_reads_both_zones() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap();
        let (ist, et) = ist_et().now_at(instant);
        assert_eq!(ist, civil("2024-03-10T07:00"));
        assert_eq!(et, civil("2024-03-09T20:30"));
    }

    #[test]
    fn status_at_reports_each_zone() {
        let instant = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let (ist, et) = ist_et().status_at(instant);
        assert!(!ist.is_dst);
        assert!(et.is_dst);
        assert_eq!(et.offset_minutes, -240);
    }

    #[test]
    fn unknown_configured_zone_fails() {
        let config = TzPairConfig {
            source_zone: "Not/AZone".into(),
            ..TzPairConfig::default()
        };
        assert!(ZonePair::from_config(&config).is_err());
    }
}
