use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info, level_filters::LevelFilter};

use crate::{
    error::SummaryError,
    report::ReportPaths,
    source::{
        activity_watch::{DEFAULT_SERVER, DEFAULT_TIMEOUT},
        ActivityWatchSource,
    },
    summary::{self, SummaryRequest},
    utils::{
        clock::{Clock, DefaultClock},
        dir::state_dir,
        host::local_hostname,
        logging::enable_logging,
        runtime::single_thread_runtime,
    },
};

#[derive(Parser, Debug)]
#[command(name = "awdigest", version, long_about = None)]
#[command(about = "Summarize a day of ActivityWatch window activity", long_about = None)]
pub struct Args {
    #[arg(
        long,
        env = "SAVE_DIRECTORY",
        help = "Directory the reports are saved into. Created if missing"
    )]
    pub dir: PathBuf,
    #[arg(
        long,
        env = "AWDIGEST_DATE",
        help = "Day to summarize as YYYY-MM-DD. Defaults to today"
    )]
    pub date: Option<NaiveDate>,
    #[arg(
        long,
        env = "AWDIGEST_HOST",
        help = "Host whose window bucket is read. Defaults to the hostname of this machine"
    )]
    pub host: Option<String>,
    #[arg(long, env = "AWDIGEST_SERVER", default_value = DEFAULT_SERVER, help = "ActivityWatch server")]
    pub server: String,
    #[arg(
        long,
        env = "AWDIGEST_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        help = "Seconds to wait for ActivityWatch"
    )]
    pub timeout: u64,
    #[arg(long, help = "Print logs to the console")]
    pub log: bool,
    #[arg(long = "log-filter", help = "Log level, for example debug or trace")]
    pub log_filter: Option<LevelFilter>,
}

/// Loads `.env`, parses arguments and runs a single summary.
pub fn run_cli() -> Result<ExitCode> {
    // A missing .env is fine, everything can come from the environment or arguments.
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let logging_level = args
        .log_filter
        .or_else(|| args.log.then_some(LevelFilter::TRACE));
    enable_logging(&state_dir()?, logging_level, args.log)?;

    let clock = DefaultClock;
    let request = build_request(&args, &clock)?;
    let source = ActivityWatchSource::new(
        &args.server,
        &request.hostname,
        Duration::from_secs(args.timeout),
    )?;
    info!("Reading events from {}", source.events_url());

    let outcome =
        single_thread_runtime()?.block_on(summary::run(&source, &clock, &request));
    Ok(ExitCode::from(report_outcome(&request, outcome)))
}

fn build_request(args: &Args, clock: &dyn Clock) -> Result<SummaryRequest> {
    let hostname = args.host.clone().map_or_else(local_hostname, Ok)?;
    Ok(SummaryRequest {
        date: args.date.unwrap_or_else(|| clock.time().date_naive()),
        hostname,
        output_dir: args.dir.clone(),
    })
}

/// Tells the user how the run went and returns the exit code for it.
fn report_outcome(request: &SummaryRequest, outcome: Result<ReportPaths, SummaryError>) -> u8 {
    match outcome {
        Ok(paths) => {
            println!("Markdown summary saved to: {}", paths.markdown.display());
            println!(
                "JSON summary saved as markdown to: {}",
                paths.structured.display()
            );
            0
        }
        Err(SummaryError::NoData) => {
            info!("Nothing to summarize for {}", request.date);
            println!("No events found for {}.", request.date);
            SummaryError::NoData.exit_code()
        }
        Err(e) => {
            error!("Summary failed {e:?}");
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
