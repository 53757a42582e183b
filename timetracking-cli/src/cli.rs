use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::grouping::Granularity;

#[derive(Debug, Parser)]
#[command(name = "timetracking")]
#[command(about = "Report recently tracked Harvest hours, workday-aware")]
pub struct Cli {
    /// Number of recent workdays to report on
    #[arg(short = 'n', long = "days", default_value_t = 10)]
    pub days: usize,

    /// Count backward from this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Group the report by a coarser calendar bucket
    #[arg(short = 'g', long = "group-by", value_enum)]
    pub group_by: Option<Granularity>,

    /// Harvest user id (defaults to the authenticated user)
    #[arg(long)]
    pub uid: Option<i64>,

    /// Forecast person id (defaults to the authenticated user)
    #[arg(long)]
    pub forecast_uid: Option<i64>,

    /// Do not synthesize zero-hour entries for workdays without tracked time
    #[arg(long)]
    pub no_empty_days: bool,

    /// List Forecast assignments for the named project instead of reporting hours
    #[arg(long, value_name = "PROJECT")]
    pub assignments: Option<String>,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
