use clap::{Parser, Subcommand};
use split_planner::engine::planner::{JobPlanner, JobRequest, PlanSummary};
use split_planner::logging;
use split_planner::shared::config::job_conf::{MAX_SPLIT_SIZE_KEY, MIN_SPLIT_SIZE_KEY};
use split_planner::shared::config::{CONFIG, Settings, load_settings_from};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "split-planner")]
#[command(about = "Plans row-group splits for columnar files", long_about = None)]
struct Args {
    /// Settings file (without extension)
    /// Defaults to SPLIT_PLANNER_CONFIG or config/planner
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan splits for the files of a job description
    Plan {
        /// Job description as JSON; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Overrides the job's minimum split size
        #[arg(long, allow_negative_numbers = true)]
        min_split_size: Option<i64>,

        /// Overrides the job's maximum split size
        #[arg(long, allow_negative_numbers = true)]
        max_split_size: Option<i64>,

        /// Pretty-print the splits
        #[arg(long)]
        pretty: bool,

        /// Print a summary of the plan to stderr
        #[arg(long)]
        summary: bool,
    },
}

fn read_request(input: Option<&PathBuf>) -> anyhow::Result<JobRequest> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings: Settings = match &args.config {
        Some(path) => load_settings_from(path)?,
        None => (**CONFIG).clone(),
    };
    logging::init(&settings.logging)?;

    match args.command {
        Command::Plan {
            input,
            min_split_size,
            max_split_size,
            pretty,
            summary,
        } => {
            let mut request = read_request(input.as_ref())?;
            if let Some(min) = min_split_size {
                request.conf.set(MIN_SPLIT_SIZE_KEY, min.to_string());
            }
            if let Some(max) = max_split_size {
                request.conf.set(MAX_SPLIT_SIZE_KEY, max.to_string());
            }

            info!(files = request.files.len(), "Planning job");
            let planner = JobPlanner::new(request.conf, &settings.planner)
                .inspect_err(|e| e.log_error())?;
            let splits = planner.plan(&request.files);

            let out = if pretty {
                serde_json::to_string_pretty(&splits)?
            } else {
                serde_json::to_string(&splits)?
            };
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", out)?;

            if summary {
                let summary =
                    PlanSummary::from_splits(&splits, &planner.planner().constraints());
                eprintln!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
    }

    Ok(())
}
