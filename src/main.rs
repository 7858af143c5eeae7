use clap::Parser;
use fruit_grader::{cli, client, config, error, session};
use cli::{Cli, Commands};
use client::HttpPredictionClient;
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Predict { image, api_url, format } => {
            let api_url = config.resolve_api_url(api_url.as_deref())?;
            let client = HttpPredictionClient::new(&api_url)?;
            let mut workflow = session::new_workflow();

            session::select_path(&mut workflow, &image)?;
            session::submit_with_spinner(&mut workflow, &client).await;
            session::print_outcome(&workflow, format)?;
        }

        Commands::Interactive { api_url } => {
            let api_url = config.resolve_api_url(api_url.as_deref())?;
            let client = HttpPredictionClient::new(&api_url)?;
            session::run_interactive(&client).await?;
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ 予測APIのURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  API URL: {}",
                    config.api_url.as_deref().unwrap_or("未設定")
                );
                if let Ok(env_url) = std::env::var(config::API_URL_ENV) {
                    println!("  {} (優先): {}", config::API_URL_ENV, env_url);
                }
            }
        }
    }

    Ok(())
}
