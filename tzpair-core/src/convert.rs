//! Civil time to civil time conversion across zones.
//!
//! The only safe place to do arithmetic is the UTC timeline, so every
//! conversion projects the source civil fields onto an `AbsoluteInstant`
//! and reads the target civil fields back off it.
//!
//! For zones that observe DST, the offset to subtract depends on the
//! instant we are trying to find. We re-estimate it twice and stop there.
//! Inside the hour of a DST transition (spring-forward gap or fall-back
//! overlap) the local time has no single meaning and the result is *a*
//! valid instant, not necessarily the one a person would pick.

use chrono::Duration;
use log::debug;

use crate::civil::{AbsoluteInstant, CivilInstant};
use crate::error::TzPairResult;
use crate::zone::Zone;

/// UTC offset of `zone` at `instant`, in minutes, positive east of UTC.
pub fn offset_minutes_at(zone: &Zone, instant: AbsoluteInstant) -> i32 {
    zone.offset_minutes_at(instant)
}

/// Civil fields in a zone whose offset never changes -> absolute instant.
pub fn fixed_offset_to_absolute(civil: &CivilInstant, fixed_offset_minutes: i32) -> AbsoluteInstant {
    civil.as_if_utc() - Duration::minutes(i64::from(fixed_offset_minutes))
}

/// Civil fields in a DST-observing zone -> absolute instant.
///
/// Two-step estimate: take the offset at the naive guess, move to the
/// corrected instant, take the offset there and apply that one to the
/// naive guess.
pub fn variable_offset_to_absolute(civil: &CivilInstant, zone: &Zone) -> AbsoluteInstant {
    let naive = civil.as_if_utc();

    let first = zone.offset_minutes_at(naive);
    let refined = naive - Duration::minutes(i64::from(first));

    let second = zone.offset_minutes_at(refined);
    if first != second {
        debug!(
            "{} in {}: offset re-estimated from {} to {} minutes",
            civil, zone, first, second
        );
    }

    naive - Duration::minutes(i64::from(second))
}

/// Absolute instant -> civil fields in `zone`.
pub fn to_civil(instant: AbsoluteInstant, zone: &Zone) -> CivilInstant {
    let offset = zone.offset_minutes_at(instant);
    let local = instant.naive_utc() + Duration::minutes(i64::from(offset));
    CivilInstant::from_naive(local)
}

/// Project civil fields read in `zone` onto the UTC timeline.
pub fn to_absolute(civil: &CivilInstant, zone: &Zone) -> AbsoluteInstant {
    match zone.fixed_offset_minutes(civil.year()) {
        Some(offset) => {
            debug!("{} has a fixed offset of {} minutes in {}", zone, offset, civil.year());
            fixed_offset_to_absolute(civil, offset)
        }
        None => {
            debug!("{} observes DST in {}", zone, civil.year());
            variable_offset_to_absolute(civil, zone)
        }
    }
}

/// Civil time in `source` -> the same instant as civil time in `target`.
pub fn convert(civil: &CivilInstant, source: &Zone, target: &Zone) -> CivilInstant {
    to_civil(to_absolute(civil, source), target)
}

/// Parse `input`, resolve both zone names, then convert.
///
/// Input is validated before the zones are looked up, so a malformed
/// date/time is reported as `InvalidInput` whatever the zone names are.
pub fn convert_named(input: &str, source: &str, target: &str) -> TzPairResult<CivilInstant> {
    let civil: CivilInstant = input.parse()?;
    let source = Zone::resolve(source)?;
    let target = Zone::resolve(target)?;

    Ok(convert(&civil, &source, &target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TzPairError;
    use chrono::{TimeZone, Utc};

    const IST: &str = "Asia/Kolkata";
    const ET: &str = "America/New_York";

    fn civil(s: &str) -> CivilInstant {
        s.parse().unwrap()
    }

    fn zone(name: &str) -> Zone {
        Zone::resolve(name).unwrap()
    }

    #[test]
    fn fixed_offset_round_trip() {
        let ist = zone(IST);
        for s in ["2024-01-01T00:00", "2024-03-10T07:00", "2024-12-31T23:59", "1999-06-15T05:29"] {
            let c = civil(s);
            assert_eq!(to_civil(fixed_offset_to_absolute(&c, 330), &ist), c);
            assert_eq!(to_civil(fixed_offset_to_absolute(&c, 330), &Zone::fixed(330)), c);
        }
    }

    #[test]
    fn fixed_offset_subtracts_offset() {
        let abs = fixed_offset_to_absolute(&civil("2024-03-10T07:00"), 330);
        assert_eq!(abs, Utc.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap());
    }

    #[test]
    fn ist_to_et_before_spring_forward() {
        let out = convert(&civil("2024-03-10T07:00"), &zone(IST), &zone(ET));
        assert_eq!(out, civil("2024-03-09T20:30"));
    }

    #[test]
    fn ist_to_et_after_spring_forward() {
        let out = convert(&civil("2024-03-11T07:00"), &zone(IST), &zone(ET));
        assert_eq!(out, civil("2024-03-10T21:30"));
    }

    #[test]
    fn et_to_ist_uses_offset_in_force() {
        let ist = zone(IST);
        let et = zone(ET);
        assert_eq!(convert(&civil("2024-01-15T09:00"), &et, &ist), civil("2024-01-15T19:30"));
        assert_eq!(convert(&civil("2024-07-15T09:00"), &et, &ist), civil("2024-07-15T18:30"));
    }

    #[test]
    fn variable_offset_resolves_just_after_transition() {
        // 03:30 EDT on transition day; the naive guess sits on the EST side.
        let abs = variable_offset_to_absolute(&civil("2024-03-10T03:30"), &zone(ET));
        assert_eq!(abs, Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap());
    }

    #[test]
    fn spring_forward_gap_takes_two_step_result() {
        // 02:30 does not exist in New York on 2024-03-10. First estimate
        // -05:00 lands at 07:30Z, where -04:00 is in force, so the result
        // is 02:30 + 4h.
        let abs = variable_offset_to_absolute(&civil("2024-03-10T02:30"), &zone(ET));
        assert_eq!(abs, Utc.with_ymd_and_hms(2024, 3, 10, 6, 30, 0).unwrap());
        assert_eq!(convert(&civil("2024-03-10T02:30"), &zone(ET), &zone(IST)), civil("2024-03-10T12:00"));
    }

    #[test]
    fn fall_back_overlap_takes_daylight_reading() {
        // 01:30 happens twice in New York on 2024-11-03; both estimates see
        // -04:00, so the earlier (EDT) instant wins.
        let abs = variable_offset_to_absolute(&civil("2024-11-03T01:30"), &zone(ET));
        assert_eq!(abs, Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
    }

    #[test]
    fn conversion_is_symmetric_outside_transitions() {
        let zones = [zone(IST), zone(ET), zone("Europe/London"), zone("Australia/Sydney"), Zone::fixed(-150)];
        let samples = [
            "2024-01-15T09:00",
            "2024-03-09T23:30",
            "2024-03-11T07:00",
            "2024-07-04T12:15",
            "2024-12-31T23:59",
        ];

        for a in &zones {
            for b in &zones {
                for s in samples {
                    let c = civil(s);
                    let there = convert(&c, a, b);
                    assert_eq!(convert(&there, b, a), c, "{s} via {a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn convert_does_not_touch_inputs() {
        let c = civil("2024-03-10T07:00");
        let copy = c;
        let _ = convert(&c, &zone(IST), &zone(ET));
        assert_eq!(c, copy);
    }

    #[test]
    fn convert_named_matches_convert() {
        let out = convert_named("2024-03-10T07:00", IST, ET).unwrap();
        assert_eq!(out, civil("2024-03-09T20:30"));
        assert_eq!(out.to_string(), "2024-03-09T20:30");
    }

    #[test]
    fn convert_named_rejects_bad_input_first() {
        for input in ["2024-13-40T25:99", "", "2024031007:00"] {
            assert!(matches!(
                convert_named(input, "Nowhere/Zone", ET),
                Err(TzPairError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn convert_named_rejects_unknown_zone() {
        assert!(matches!(
            convert_named("2024-03-10T07:00", IST, "Nowhere/Zone"),
            Err(TzPairError::UnknownZone(_))
        ));
    }

    #[test]
    fn to_absolute_picks_path_by_zone() {
        let c = civil("2024-03-10T02:30");
        assert_eq!(to_absolute(&c, &zone(IST)), fixed_offset_to_absolute(&c, 330));
        assert_eq!(to_absolute(&c, &zone(ET)), variable_offset_to_absolute(&c, &zone(ET)));
    }

    #[test]
    fn extreme_years_are_rejected_not_converted() {
        assert!(matches!(
            convert_named("-262143-01-01T00:00", IST, ET),
            Err(TzPairError::InvalidInput(_))
        ));
        assert!(matches!(
            convert_named("+262142-12-31T23:59", IST, ET),
            Err(TzPairError::InvalidInput(_))
        ));
    }

    #[test]
    fn edges_of_accepted_range_convert() {
        let late = convert_named("9999-12-31T23:59", "-12:00", "+14:00").unwrap();
        assert_eq!(late.year(), 10000);

        let early = convert_named("0001-01-01T00:00", "+14:00", "-12:00").unwrap();
        assert_eq!(early.year(), 0);
    }

    #[test]
    fn offset_lookup_is_direct() {
        let et = zone(ET);
        let t = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(offset_minutes_at(&et, t), -240);
        assert_eq!(offset_minutes_at(&zone(IST), t), 330);
    }
}
