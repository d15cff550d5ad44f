use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use tzpair_core::config::TzPairConfig;

use crate::zones::{LOCAL_ZONE, resolve_zone};

pub fn run(config_path: &Path, config: &TzPairConfig) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();
    println!("{}", "Zones".bold());
    println!("  Source:  {}", config.source_zone);
    println!("  Target:  {}", config.target_zone);

    Ok(())
}

/// Validate and store new zone names.
pub fn update(
    config_path: &Path,
    mut config: TzPairConfig,
    source: Option<String>,
    target: Option<String>,
) -> Result<()> {
    if let Some(name) = source {
        config.source_zone = canonical_name(&name)?;
    }
    if let Some(name) = target {
        config.target_zone = canonical_name(&name)?;
    }

    config.save_to(config_path)?;
    println!("{}", "  Saved.".green());

    run(config_path, &config)
}

/// Name to store for a zone: `local` stays symbolic so it follows the
/// host, everything else is stored as resolved.
fn canonical_name(name: &str) -> Result<String> {
    if name.eq_ignore_ascii_case(LOCAL_ZONE) {
        return Ok(LOCAL_ZONE.to_string());
    }

    Ok(resolve_zone(name)?.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(canonical_name("LOCAL").unwrap(), "local");
        assert_eq!(canonical_name("kolkata").unwrap(), "Asia/Kolkata");
        assert_eq!(canonical_name("UTC+05:30").unwrap(), "+05:30");
        assert!(canonical_name("Atlantis").is_err());
    }

    #[test]
    fn update_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        update(&path, TzPairConfig::default(), None, Some("london".into())).unwrap();

        let saved = TzPairConfig::load_from(&path).unwrap();
        assert_eq!(saved.source_zone, "Asia/Kolkata");
        assert_eq!(saved.target_zone, "Europe/London");
    }
}
