use anyhow::Context;
use clap::Parser;

use gildedrose_cli::{Cli, report};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gildedrose_observability::init(cli.log_format);

    let items = cli.load_items().context("failed to load inventory")?;
    tracing::info!(
        days = cli.days,
        items = items.len(),
        inventory = ?cli.inventory,
        format = ?cli.format,
        "starting simulation"
    );

    let mut stdout = std::io::stdout().lock();
    report::write_report(&mut stdout, items, cli.days, cli.format)?;

    tracing::info!(days = cli.days, "simulation finished");
    Ok(())
}
