use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use serde::Serialize;
use tzpair_core::{CivilInstant, ZonePair, to_absolute};

use crate::render::render_conversion;

/// Machine-readable result of `tzpair convert --json`.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub input: CivilInstant,
    pub from: String,
    pub to: String,
    pub output: CivilInstant,
    pub utc: String,
}

impl ConversionReport {
    pub fn new(pair: &ZonePair, input: CivilInstant) -> Self {
        ConversionReport {
            input,
            from: pair.source.name().to_string(),
            to: pair.target.name().to_string(),
            output: pair.convert_from_source(&input),
            utc: to_absolute(&input, &pair.source).to_rfc3339(),
        }
    }
}

pub fn run(pair: ZonePair, datetime: Option<String>, json: bool) -> Result<()> {
    let input = match datetime {
        Some(s) => s.parse::<CivilInstant>()?,
        None => prompt_with_retry(&format!("  Time in {} (YYYY-MM-DDTHH:MM)", pair.source))?,
    };

    let report = ConversionReport::new(&pair, input);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}",
            render_conversion(&report.input, &pair.source, &report.output, &pair.target)
        );
    }

    Ok(())
}

/// Prompt for a civil time until it parses.
fn prompt_with_retry(prompt: &str) -> Result<CivilInstant> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match input.parse::<CivilInstant>() {
            Ok(civil) => return Ok(civil),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
