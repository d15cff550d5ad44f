use anyhow::Result;
use chrono::Utc;
use tzpair_core::ZonePair;

use crate::render::render_zone_line;

pub fn run(pair: ZonePair) -> Result<()> {
    let now = Utc::now();
    let (source_now, target_now) = pair.now_at(now);
    let (source_status, target_status) = pair.status_at(now);

    println!("{}", render_zone_line(&pair.source, &source_now, &source_status));
    println!("{}", render_zone_line(&pair.target, &target_now, &target_status));

    Ok(())
}
