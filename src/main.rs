mod cli;

use chrono::{Local, NaiveDate};
use clap::Parser;
use habitscore::error::HabitError;
use habitscore::types::completion::{parse_date, DATE_FORMAT};
use habitscore::types::config::HabitConfig;
use habitscore::types::habit::FrequencyKind;
use habitscore::{config, engine, lint, report, store};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, HabitError> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn load_settings(path: &Path) -> Result<Option<HabitConfig>, HabitError> {
    if !path.exists() {
        return Err(HabitError::PathNotFound(path.display().to_string()));
    }
    config::load_config(&config::config_root(path))
}

fn run() -> Result<i32, HabitError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Stats(cmd) => {
            let today = resolve_today(cmd.today.as_deref())?;
            let settings = load_settings(&cmd.path)?
                .unwrap_or_default()
                .settings();
            let habits = store::load_habits(&cmd.path)?;
            let habit_report = report::build_report(&habits, today, &settings)?;
            println!(
                "{}",
                report::render(&habit_report, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let today = resolve_today(cmd.today.as_deref())?;
            let mut settings = load_settings(&cmd.path)?
                .unwrap_or_default()
                .settings();
            if let Some(days) = cmd.days {
                settings.windows.history_days = days;
            }
            let habits = store::load_habits(&cmd.path)?;
            let habit_report = report::build_report(&habits, today, &settings)?;
            println!(
                "{}",
                report::render_history(&habit_report, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Scheduled(cmd) => {
            if !cmd.path.exists() {
                return Err(HabitError::PathNotFound(cmd.path.display().to_string()));
            }
            let from = resolve_today(cmd.from.as_deref())?;
            let habit = store::load_habit(&cmd.path)?;
            let days = engine::scheduled_days(&habit.schedule, from, cmd.days);

            println!("{} ({}):", habit.name(), habit.schedule.label());
            if days.is_empty() {
                println!("- none in the next {} day(s)", cmd.days);
            }
            for day in days {
                let mark = if habit.completions.contains(day) {
                    "x"
                } else {
                    " "
                };
                println!("- [{mark}] {} {}", day.format(DATE_FORMAT), day.format("%a"));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            let today = resolve_today(cmd.today.as_deref())?;
            let loaded = load_settings(&cmd.path)?;
            let findings = lint::lint_path(&cmd.path, loaded.as_ref(), today);

            if findings.is_empty() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                match &finding.file {
                    Some(file) => println!("[{}] {} ({}): {}", level, finding.id, file, finding.title),
                    None => println!("[{}] {}: {}", level, finding.id, finding.title),
                }
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Init(cmd) => {
            let frequency = match cmd.frequency {
                cli::Frequency::Daily => FrequencyKind::Daily,
                cli::Frequency::Weekly => FrequencyKind::Weekly,
                cli::Frequency::Interval => FrequencyKind::Interval,
                cli::Frequency::SpecificDays => FrequencyKind::SpecificDays,
            };
            let record =
                store::template::new_record(&cmd.name, frequency, Local::now().date_naive());
            store::template::write_record(&cmd.path, &record, cmd.force)?;
            println!("habit file: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
