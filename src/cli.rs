use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "habitscore",
    version,
    about = "Habit strength, streak and completion-rate scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strength, streaks and completion rate for each habit
    Stats(StatsCommand),
    /// Daily strength series for charting
    History(HistoryCommand),
    /// List the days a habit is scheduled on
    Scheduled(ScheduledCommand),
    /// Check habit records and configuration
    Lint(LintCommand),
    /// Write a new habit record
    Init(InitCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Frequency {
    Daily,
    Weekly,
    Interval,
    SpecificDays,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct StatsCommand {
    /// Habit file or directory of habit files
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct HistoryCommand {
    pub path: PathBuf,
    /// Number of days to chart, overrides windows.history_days
    #[arg(long)]
    pub days: Option<u32>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct ScheduledCommand {
    /// Habit file
    pub path: PathBuf,
    /// First day to list (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub from: Option<String>,
    #[arg(long, default_value_t = 14)]
    pub days: u32,
}

#[derive(Args)]
pub struct LintCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the record; a .json extension writes JSON
    pub path: PathBuf,
    #[arg(long)]
    pub name: String,
    #[arg(long, value_enum, default_value = "daily")]
    pub frequency: Frequency,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
