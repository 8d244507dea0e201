mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod report_generation;
mod shared;

use adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::formatters::PlainTextFormatter;
use adapters::outbound::pacman::PacmanQuery;
use application::use_cases::GenerateReportUseCase;
use cli::Args;
use ports::outbound::{OutputPresenter, PackageQuery, ProgressReporter, ReportFormatter};
use shared::error::ExitCode;
use shared::Result;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments and merge in any config file
    let args = Args::parse_args();
    let options = args.resolve()?;

    let lookup_timeout = Duration::from_secs(options.timeout_secs);

    // Create adapters (Dependency Injection) and generate the report
    let formatted_output = if options.quiet {
        generate(
            PacmanQuery::new(lookup_timeout),
            SilentProgressReporter::new(),
        )
        .await?
    } else {
        generate(
            PacmanQuery::new(lookup_timeout),
            StderrProgressReporter::new(),
        )
        .await?
    };

    // Present output
    let presenter: Box<dyn OutputPresenter> = match options.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Runs the use case with the given port implementations and renders the
/// report to its final text form.
async fn generate<Q, PR>(package_query: Q, progress_reporter: PR) -> Result<String>
where
    Q: PackageQuery,
    PR: ProgressReporter,
{
    let use_case = GenerateReportUseCase::new(package_query, progress_reporter);
    let response = use_case.execute().await?;

    let formatter = PlainTextFormatter::new();
    formatter.format(&response.read_model)
}
