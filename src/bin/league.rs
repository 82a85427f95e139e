//! Fetch a Sleeper league and write its JSON snapshots and web view model.
//! Run with: cargo run --bin league -- <LEAGUE_ID>
//! Exits 0 on success, 1 on any configuration, network or write failure.

use sleeper_league_web::{
    format_league_summary, format_top_unrostered, run, serve::serve, CliArgs, Config, SleeperClient,
};
use std::process::ExitCode;

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    match fetch_and_serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn fetch_and_serve() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliArgs::parse(std::env::args().skip(1))?;
    if cli.help {
        println!("{}", sleeper_league_web::config::USAGE);
        return Ok(());
    }
    let config = Config::from_cli(&cli)?;

    let client = SleeperClient::new(config.api_base.as_str(), config.request_delay)?;
    let report = run(&config, &client).await?;

    println!("{}", format_league_summary(&report.snapshot.league, &report.view));
    if let Some(unrostered) = &report.snapshot.unrostered {
        println!("{}", format_top_unrostered(unrostered));
    }
    println!("OUTPUT FILES CREATED:");
    for path in &report.files {
        println!("  {}", path.display());
    }

    if config.serve {
        serve(config.out_dir.clone(), &config.host, config.port).await?;
    }
    Ok(())
}
