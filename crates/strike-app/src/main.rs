use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use strike_app::script::{self, SortieReport};
use strike_core::config::StrikeConfig;

/// Fly the STRIKE demo sortie and print its report as JSON.
#[derive(Parser, Debug)]
#[command(name = "strike")]
struct Args {
    /// JSON config file. Built-in defaults when omitted.
    config: Option<PathBuf>,

    /// Fly on the real-time game loop thread instead of a private engine.
    #[arg(long)]
    live: bool,

    /// Time scale for a live sortie.
    #[arg(long, default_value_t = 4.0)]
    time_scale: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("strike_sim=info,strike_app=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match StrikeConfig::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config loaded");
                config
            }
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "failed to load config");
                return ExitCode::FAILURE;
            }
        },
        None => StrikeConfig::default(),
    };

    let report = if args.live {
        match script::run_live_sortie(config, args.time_scale) {
            Ok(report) => report,
            Err(error) => {
                tracing::error!(%error, "live sortie failed");
                return ExitCode::FAILURE;
            }
        }
    } else {
        script::run_scripted_sortie(config)
    };
    finish(&report)
}

fn finish(report: &SortieReport) -> ExitCode {
    tracing::info!(
        stage = %report.stage,
        completed = report.completed,
        destroyed = report.targets_destroyed,
        health = report.health,
        elapsed = report.elapsed_secs,
        "sortie finished"
    );

    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(error) => {
            tracing::error!(%error, "failed to serialize report");
            return ExitCode::FAILURE;
        }
    }

    if report.completed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
