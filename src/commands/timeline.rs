//! Timeline command handler

use std::io::{self, IsTerminal};

use anyhow::Result;
use serde::Serialize;

use sonic_sync::cli::TimelineArgs;
use sonic_sync::shell::render::{format_precise_time, intensity_color, pattern_summary};
use sonic_sync::timeline::{BoundaryRule, SegmentTable, VibrationSegment};
use sonic_sync::Config;

use super::resolve_table;

#[derive(Serialize)]
struct TimelineReport<'a> {
    boundary: BoundaryRule,
    segments: &'a [VibrationSegment],
    overlaps: Vec<(&'a str, &'a str)>,
}

/// Print the resolved timeline.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: TimelineArgs, config: &Config) -> Result<()> {
    let table = resolve_table(args.timeline.as_deref(), config)?;

    if args.json {
        let report = TimelineReport {
            boundary: table.rule(),
            segments: table.segments(),
            overlaps: table.overlaps(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_table(&table, io::stdout().is_terminal());
    Ok(())
}

fn print_table(table: &SegmentTable, color: bool) {
    println!(
        "{:<18} {:>8}  {:>8}  {:<4}  {:<20} NAME",
        "ID", "START", "END", "LVL", "PATTERN"
    );
    for segment in table.iter() {
        let level = segment.intensity.label();
        let level = if color {
            format!("{}{:<4}\x1b[0m", intensity_color(segment.intensity), level)
        } else {
            format!("{:<4}", level)
        };
        println!(
            "{:<18} {:>8}  {:>8}  {}  {:<20} {}",
            segment.id,
            format_precise_time(segment.start),
            format_precise_time(segment.end),
            level,
            pattern_summary(&segment.pattern),
            segment.name
        );
    }

    let overlaps = table.overlaps();
    if !overlaps.is_empty() {
        println!();
        for (first, second) in overlaps {
            println!("overlap: {first} and {second} (first listed wins)");
        }
    }
}
