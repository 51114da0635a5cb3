//! Coursetrack CLI - course progress against a target end date.

mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use coursetrack_core::{EditRequest, ProgressSnapshot, Projection};
use coursetrack_progress::{ProgressTracker, ScheduleEstimator};
use coursetrack_storage::{ConfigStore, CsvStorage, DEFAULT_CONFIG_FILE};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coursetrack")]
#[command(about = "Track course progress against a target end date", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Show schedule status and progress
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark one course as completed
    Complete,
    /// Edit the configuration
    Edit {
        /// Target end date (YYYY-MM-DD)
        #[arg(long)]
        end_date: String,
        /// Study hours available per week
        #[arg(long)]
        weekly_hours: String,
        /// Total courses in the program
        #[arg(long)]
        max_courses: String,
        /// Estimated hours per course; kept unchanged when omitted
        #[arg(long)]
        hours_per_course: Option<String>,
    },
    /// Show the current configuration
    Show,
    /// Refresh the status periodically until interrupted
    Watch {
        /// Seconds between refreshes
        #[arg(long, default_value = "1")]
        interval_secs: u64,
    },
}

#[derive(Serialize)]
struct StatusReport {
    complete: bool,
    projection: Projection,
    progress: ProgressSnapshot,
}

fn init_logging() {
    // stdout carries command output, including JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn report(store: &mut ConfigStore<CsvStorage>) -> StatusReport {
    let projection = ScheduleEstimator.status(store.config(), Utc::now());
    let complete = store.is_complete();
    let progress = ProgressTracker::new(store).snapshot();
    StatusReport {
        complete,
        projection,
        progress,
    }
}

fn print_status(store: &mut ConfigStore<CsvStorage>) {
    let report = report(store);
    println!("{}", render::status_line(&report.projection));
    println!("{}", render::progress_line(&report.progress));
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut store = ConfigStore::open(CsvStorage::new(&cli.config));

    match cli.command {
        Commands::Status { json } => {
            if json {
                let report = report(&mut store);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_status(&mut store);
            }
        }
        Commands::Complete => {
            let completed = ProgressTracker::new(&mut store)
                .complete_course()
                .context("failed to save progress")?;
            if completed {
                println!("Course completed.");
            } else {
                println!("All courses are already completed.");
            }
            print_status(&mut store);
        }
        Commands::Edit {
            end_date,
            weekly_hours,
            max_courses,
            hours_per_course,
        } => {
            let request = EditRequest::parse(
                &end_date,
                &weekly_hours,
                &max_courses,
                hours_per_course.as_deref(),
            )
            .context("invalid input values")?;
            store
                .edit_request(request)
                .context("configuration not saved")?;
            println!("Configuration saved successfully.");
            print_status(&mut store);
        }
        Commands::Show => {
            for line in render::config_lines(store.config()) {
                println!("{line}");
            }
            if let Some(hint) =
                render::setup_hint(store.load_outcome(), store.is_complete(), &cli.config)
            {
                println!();
                println!("{hint}");
            }
        }
        Commands::Watch { interval_secs } => {
            info!(interval_secs, "Watching {}", cli.config.display());
            let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        store.load();
                        print_status(&mut store);
                    }
                    _ = &mut ctrl_c => break,
                }
            }
        }
    }

    Ok(())
}
