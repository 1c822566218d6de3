use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::debug;

use veritor::errors::VeritorResult;
use veritor::models::{SnapshotConstraints, UrlConstraints, Verdict};
use veritor::verifiers;

mod cli;
use cli::{Commands, VeritorCli};

fn main() -> Result<()> {
    let cli = VeritorCli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level),
    )
    .init();

    let verdict = match &cli.command {
        Commands::Snapshot {
            file,
            max_price,
            city,
            bedrooms,
        } => run_snapshot(file, *max_price, city, *bedrooms)?,
        Commands::Url {
            final_url,
            repo,
            search_type,
            label,
        } => {
            let constraints = UrlConstraints {
                repo: repo.clone(),
                search_type: search_type.clone(),
                label: label.clone(),
            };
            verifiers::url::verify(final_url, &constraints)
        }
    };

    report(&verdict, cli.json)?;

    if !verdict.success {
        std::process::exit(1);
    }
    Ok(())
}

fn run_snapshot(file: &Path, max_price: f64, city: &str, bedrooms: i64) -> VeritorResult<Verdict> {
    debug!("Reading snapshot from {}", file.display());
    let html = fs::read_to_string(file)?;
    let constraints = SnapshotConstraints {
        max_price,
        city: city.to_string(),
        bedrooms,
    };
    Ok(verifiers::snapshot::verify(&html, &constraints))
}

fn report(verdict: &Verdict, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(verdict)?);
        return Ok(());
    }

    let tag = if verdict.success {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };
    println!("{} {}", tag, verdict.reason);
    println!("{}", serde_json::to_string_pretty(&verdict.evidence)?);
    Ok(())
}
