// src/main.rs

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

mod config;
mod core;
mod logging;
mod output;

use crate::core::models::ScanStatus;

/// The Aegis HTML Vulnerability Analyser 1.0
#[derive(Parser, Debug)]
#[command(name = "aegis", version, disable_version_flag = true)]
struct Cli {
    /// The URL of the HTML to analyse (http://, https:// or file://)
    url: String,

    /// Path to a YAML file enabling or disabling individual checks
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match logging::initialize_logging() {
        Ok(path) => info!(log = %path.display(), "Logging initialized."),
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    if let Some(path) = &cli.config {
        println!("Using Config File {}", path.display());
    }
    let config = config::load_config(cli.config.as_deref());

    println!("{}", cli.url);
    let report = core::scanner::run_scan(&cli.url, &config).await;
    let text = core::report::render(&report);
    println!("{}", text);

    if let Some(path) = &cli.output {
        match output::write_report(path, &text) {
            Ok(()) => println!("Report Generated and saved to {}", path.display()),
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(exit_code(report.status))
}

// `Invalid` exits with 2 so scripts can tell an unreadable target from a clean page.
fn exit_code(status: ScanStatus) -> ExitCode {
    match status {
        ScanStatus::Invalid => ExitCode::from(2),
        ScanStatus::Secure | ScanStatus::IssuesFound => ExitCode::SUCCESS,
    }
}
