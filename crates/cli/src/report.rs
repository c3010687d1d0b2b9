use std::io::Write;

use gildedrose_inventory::{Item, advance_days, update_quality};

use crate::config::ReportFormat;
use crate::error::{CliError, CliResult};

/// Run the simulation for `days` days and write the report to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    mut items: Vec<Item>,
    days: u32,
    format: ReportFormat,
) -> CliResult<()> {
    match format {
        ReportFormat::Text => {
            for day in 0..=days {
                if day > 0 {
                    update_quality(&mut items);
                }
                tracing::debug!(day, "rendering stock");
                write_day(out, day, &items)?;
            }
        }
        ReportFormat::Json => {
            advance_days(&mut items, days);
            serde_json::to_writer_pretty(&mut *out, &items).map_err(CliError::from_report_json)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_day<W: Write>(out: &mut W, day: u32, items: &[Item]) -> CliResult<()> {
    writeln!(out, "-------- day {day} --------")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)?;
    Ok(())
}
