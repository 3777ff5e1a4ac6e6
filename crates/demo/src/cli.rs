// File: crates/demo/src/cli.rs
// Summary: Command-line arguments; flags given here take precedence over the config file.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "statement-charts", version, about = "Monthly income and spending charts from a bank statement CSV")]
pub struct Cli {
    /// Statement CSV in the `all_transactions.csv` column layout.
    pub input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Overrides `paths.export_dir`.
    #[arg(short = 'o', long)]
    pub export_dir: Option<PathBuf>,

    /// First date to include (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    #[arg(long)]
    pub no_charts: bool,

    #[arg(long)]
    pub no_csv: bool,

    /// Chart theme name (`light` or `dark`).
    #[arg(long)]
    pub theme: Option<String>,

    /// Never try the Skia backend.
    #[arg(long)]
    pub fallback_only: bool,

    #[arg(long)]
    pub utf8_bom: bool,

    /// -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.export_dir {
            config.paths.export_dir = dir.clone();
        }
        if self.no_charts {
            config.reports.charts_enabled = false;
        }
        if self.no_csv {
            config.reports.csv_export = false;
        }
        if let Some(theme) = &self.theme {
            config.charts.theme = theme.clone();
        }
        if self.fallback_only {
            config.charts.prefer_rich_backend = false;
        }
        if self.utf8_bom {
            config.reports.csv_utf8_bom = true;
        }
        match self.verbose {
            0 => {}
            1 => config.log.level = "debug".to_string(),
            _ => config.log.level = "trace".to_string(),
        }
    }
}
