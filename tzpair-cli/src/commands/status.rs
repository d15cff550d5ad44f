use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use log::debug;
use owo_colors::OwoColorize;
use tzpair_core::{Zone, offset_status_at, to_civil};

use super::WATCH_INTERVAL_SECS;
use crate::render::render_zone_line;

pub fn run(zones: Vec<Zone>, watch: bool) -> Result<()> {
    loop {
        print_statuses(&zones);

        if !watch {
            return Ok(());
        }

        debug!("Refreshing in {}s", WATCH_INTERVAL_SECS);
        thread::sleep(Duration::from_secs(WATCH_INTERVAL_SECS));
        println!();
    }
}

fn print_statuses(zones: &[Zone]) {
    let now = Utc::now();
    println!("{}", format!("As of {}", now.format("%Y-%m-%d %H:%M UTC")).dimmed());

    for zone in zones {
        let status = offset_status_at(zone, now);
        println!("{}", render_zone_line(zone, &to_civil(now, zone), &status));
    }
}
