//! Person Suite - Main Entry Point
//!
//! Runs the person API scenarios against a live server, printing every
//! exchange and a final summary. Exits non-zero when any scenario fails.

mod summary;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use person_suite_application::{Scenario, SuiteRunner};
use person_suite_infrastructure::{
    ConsoleExchangeLogger, Palette, ReqwestHttpClient, SuiteConfig, init_tracing,
};
use url::Url;

/// Conformance suite for the person CRUD API.
#[derive(Debug, Parser)]
#[command(name = "person-suite", version, about)]
struct Cli {
    /// Only run scenarios whose name contains this text
    filter: Option<String>,

    /// Root URL of the API (overrides `PERSON_API_BASE_URL`)
    #[arg(long)]
    base_url: Option<Url>,

    /// Per-request timeout in milliseconds (overrides `PERSON_API_TIMEOUT_MS`)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Print scenario names and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn apply(&self, config: &mut SuiteConfig) {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(ms) = self.timeout_ms {
            config.timeout = Some(Duration::from_millis(ms));
        }
        config.no_color |= self.no_color;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list {
        for scenario in Scenario::all() {
            println!("{scenario}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = SuiteConfig::from_env().context("invalid configuration")?;
    cli.apply(&mut config);
    init_tracing(&config.log_level);

    let palette = Palette::for_stdout(config.no_color);
    println!("{}", palette.heading("Running Person API Tests"));
    tracing::info!(base_url = %config.base_url, "Target API");

    let client = ReqwestHttpClient::new(config.timeout).context("failed to build HTTP client")?;
    let logger = ConsoleExchangeLogger::stdout(config.no_color);
    let mut runner = SuiteRunner::new(Arc::new(client), logger, config.base_url.clone());
    if let Some(filter) = &cli.filter {
        runner = runner.with_filter(filter.as_str());
    }
    if runner.selected().is_empty() {
        bail!(
            "no scenario matches '{}'",
            cli.filter.as_deref().unwrap_or_default()
        );
    }

    let report = runner.run().await;
    print!("{}", summary::render(&report, palette));

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
