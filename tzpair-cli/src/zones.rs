//! Zone name handling on top of `Zone::resolve`.

use anyhow::{Context, Result};
use chrono_tz::TZ_VARIANTS;
use tzpair_core::config::TzPairConfig;
use tzpair_core::{TzPairError, Zone, ZonePair};

/// Zone name standing for the host's own time zone.
pub const LOCAL_ZONE: &str = "local";

/// Resolve a zone name, accepting `local` and bare city names like `Kolkata`.
pub fn resolve_zone(name: &str) -> Result<Zone> {
    if name.eq_ignore_ascii_case(LOCAL_ZONE) {
        let system = iana_time_zone::get_timezone()
            .context("Could not determine the system time zone")?;
        return Zone::resolve(&system)
            .with_context(|| format!("System time zone '{}' is not in the tz database", system));
    }

    match Zone::resolve(name) {
        Ok(zone) => Ok(zone),
        Err(TzPairError::UnknownZone(_)) => {
            let candidates = suggest_zones(name);
            match candidates.as_slice() {
                [only] => Ok(Zone::resolve(only)?),
                [] => anyhow::bail!("Unknown time zone '{}'", name),
                many => anyhow::bail!(
                    "Ambiguous time zone '{}'. Did you mean: {}",
                    name,
                    many.join(", ")
                ),
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// IANA names whose last segment matches `name`, ignoring case and
/// treating spaces as underscores ("new york" -> America/New_York).
pub fn suggest_zones(name: &str) -> Vec<&'static str> {
    let wanted = name.trim().replace(' ', "_");
    if wanted.is_empty() {
        return Vec::new();
    }

    TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|full| {
            full.rsplit('/')
                .next()
                .is_some_and(|city| city.eq_ignore_ascii_case(&wanted))
        })
        .collect()
}

/// Zone pair from config, with either side overridden from the command line.
pub fn resolve_pair(config: &TzPairConfig, from: Option<&str>, to: Option<&str>) -> Result<ZonePair> {
    let source = resolve_zone(from.unwrap_or(&config.source_zone))?;
    let target = resolve_zone(to.unwrap_or(&config.target_zone))?;

    Ok(ZonePair::new(source, target))
}
