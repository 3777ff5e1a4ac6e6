// File: crates/demo/src/main.rs
// Summary: CLI entry point: reads config and flags, then renders monthly charts from a statement CSV.

use anyhow::Result;
use clap::Parser;
use statement_charts::app::DateRange;
use statement_charts::{logging, run, AppConfig, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config)?;
    cli.apply(&mut config);
    logging::init(&config.log.level)?;

    let range = DateRange { start: cli.start_date, end: cli.end_date };
    let summary = run(&cli.input, range, &config)?;

    println!("Loaded {} transactions from {}", summary.records, cli.input.display());
    if let Some(csv) = &summary.csv {
        println!("Wrote {} monthly CSV files and {}", csv.months.len(), csv.all.display());
    }
    for (month, charts) in &summary.charts {
        println!(
            "{month}: income {} spending {} net {}",
            charts.summary.total_income, charts.summary.total_spending, charts.summary.net
        );
        println!("  Wrote {}", charts.proportion.display());
        println!("  Wrote {}", charts.daily.display());
    }
    if let (Some(backend), Some(manifest)) = (summary.backend, &summary.manifest) {
        println!("Charts rendered with the {backend} backend; manifest at {}", manifest.display());
    }
    Ok(())
}
