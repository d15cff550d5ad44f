use std::io;

use log::LevelFilter;

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "TZPAIR_LOG";

/// Map a `TZPAIR_LOG` value to a level filter; unset or unknown means `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("error") => LevelFilter::Error,
        Some("off") => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Install the stderr logger. `verbose` forces at least `debug`.
pub fn setup_logging(verbose: bool) -> Result<(), fern::InitError> {
    let mut level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    if verbose && level < LevelFilter::Debug {
        level = LevelFilter::Debug;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;

    Ok(())
}
