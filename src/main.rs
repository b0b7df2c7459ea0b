use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use e2e_report::report;
use e2e_report::utils::config::{Config, DEFAULT_REPORT_FILE};

#[derive(Parser)]
#[command(name = "e2e-report")]
#[command(version)]
#[command(about = "Render a JUnit XML test report as a markdown CI comment", long_about = None)]
struct Cli {
    /// Path to the JUnit XML report
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    file: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config {
        report_file: cli.file,
        output: cli.output,
    };

    let mut out = match config.open_output() {
        Ok(out) => out,
        Err(err) => {
            eprintln!("{} {}", "✗".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    let result = report::run_report(&config, &mut out);

    if let Err(err) = out.flush() {
        eprintln!("{} failed to write report: {}", "✗".red().bold(), err);
        return ExitCode::FAILURE;
    }

    ExitCode::from(report::exit_status(&result))
}
