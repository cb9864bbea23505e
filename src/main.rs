//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_dl::{
    cli::{types::time::current_season_year, Commands, NbaDl, SeasonRange},
    commands::{
        boxscores::handle_boxscores, gamelogs::handle_gamelogs, pbp::handle_pbp,
        validate_year_range,
    },
    DownloadConfig, Downloader, Result, SeasonType, SeasonYear,
};
use tracing_subscriber::EnvFilter;

fn setup(range: &SeasonRange) -> Result<(Downloader, Vec<SeasonYear>, SeasonType, bool)> {
    let years = validate_year_range(range.start_year, range.end_year, current_season_year())?;
    let config = DownloadConfig::new(range.dl_dir.clone())
        .with_requests_per_min(range.requests_per_min);
    config.ensure_dirs()?;
    let downloader = Downloader::new(config)?;
    Ok((downloader, years, range.season_type, !range.refresh))
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nba_dl=info")),
        )
        .init();

    let app = NbaDl::parse();

    match app.command {
        Commands::Gamelogs { range } => {
            let (downloader, years, season_type, use_local) = setup(&range)?;
            handle_gamelogs(&downloader, &years, season_type, use_local).await?;
        }

        Commands::Boxscores { range } => {
            let (downloader, years, season_type, use_local) = setup(&range)?;
            handle_boxscores(&downloader, &years, season_type, use_local).await?;
        }

        Commands::Pbp { range } => {
            let (downloader, years, season_type, use_local) = setup(&range)?;
            handle_pbp(&downloader, &years, season_type, use_local).await?;
        }
    }

    Ok(())
}
