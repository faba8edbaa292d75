//! pdf-merger - Merge every PDF in ./input into a single document in ./output.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Dispatch, error, info};

use pdf_merger::cli::Cli;
use pdf_merger::config::Config;
use pdf_merger::error::PdfMergerError;
use pdf_merger::logging::build_dispatch;
use pdf_merger::pipeline::{self, RunOutcome};

fn main() {
    let cli = Cli::parse();

    // The exit code never reflects the outcome of the run.
    if let Err(err) = run(&cli) {
        eprintln!("An unexpected error occurred: {err:#}");
    }
}

/// Run the pipeline on a blocking worker, racing it against Ctrl-C.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::try_from(cli)?;
    let dispatch = build_dispatch(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the runtime")?;

    let worker_config = config.clone();
    let worker_dispatch = dispatch.clone();

    let finished = runtime.block_on(async move {
        let worker = tokio::task::spawn_blocking(move || {
            tracing::dispatcher::with_default(&worker_dispatch, || {
                pipeline::run(&worker_config)
            })
        });

        // Without a signal handler the run simply cannot be interrupted.
        let interrupted = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            joined = worker => Some(joined),
            () = interrupted => None,
        }
    });

    let reported = match finished {
        Some(Ok(outcome)) if config.json => print_json(&outcome),
        Some(Ok(_)) => Ok(()),
        Some(Err(join_err)) => {
            println!("An unexpected error occurred: {join_err}");
            log(&dispatch, || error!("Unexpected error: {join_err}"));
            Ok(())
        }
        None => {
            let cancelled = PdfMergerError::Cancelled;
            println!("\n{cancelled}.");
            log(&dispatch, || info!("{cancelled}"));
            if config.json {
                print_json(&RunOutcome::from(&cancelled))
            } else {
                Ok(())
            }
        }
    };

    // Do not wait for a worker that is still running after Ctrl-C.
    runtime.shutdown_background();

    reported
}

fn print_json(outcome: &RunOutcome) -> Result<()> {
    let json = serde_json::to_string_pretty(outcome).context("failed to serialize the outcome")?;
    println!("{json}");
    Ok(())
}

fn log(dispatch: &Dispatch, event: impl FnOnce()) {
    tracing::dispatcher::with_default(dispatch, event);
}
