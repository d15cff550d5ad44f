//! TUI rendering traits for tzpair types.
//!
//! Extension traits that add colored terminal rendering to tzpair-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use tzpair_core::{CivilInstant, OffsetStatus, Zone};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Zone {
    fn render(&self) -> String {
        format!("🌐 {}", self.name().bold())
    }
}

impl Render for OffsetStatus {
    fn render(&self) -> String {
        let label = format!("UTC{}", self.offset_label());
        let badge = if self.is_dst {
            self.dst_badge().yellow().to_string()
        } else {
            self.dst_badge().dimmed().to_string()
        };

        format!("{} {}", label.cyan(), badge)
    }
}

impl Render for CivilInstant {
    fn render(&self) -> String {
        self.to_string().green().to_string()
    }
}

/// One zone with its civil time and offset status on a single line.
pub fn render_zone_line(zone: &Zone, civil: &CivilInstant, status: &OffsetStatus) -> String {
    format!("{}  {}  {}", zone.render(), civil.render(), status.render())
}

/// "<input> <source>  →  <output> <target>"
pub fn render_conversion(
    input: &CivilInstant,
    source: &Zone,
    output: &CivilInstant,
    target: &Zone,
) -> String {
    format!(
        "{} {}  {}  {} {}",
        input,
        source.name().dimmed(),
        "→".dimmed(),
        output.render(),
        target.name().dimmed()
    )
}
