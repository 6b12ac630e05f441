// Standard library
use std::io;
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod cli;
mod functions;
mod providers;
mod settings;
mod utility;

// Project imports
use crate::cli::Cli;
use crate::functions::run;
use crate::settings::types::ConfigManager;

/// Main entry point for whereami.
/// Prints the public IP address of this machine, as agreed on by a quorum
/// of independent third-party services.
///
/// Features:
/// - Randomized provider order to spread the load
/// - Consensus validation across JSON and HTML based services
/// - Configurable quorum, timeouts and providers
/// - Detailed lookup log with `--verbose`
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();

    let config: ConfigManager = match ConfigManager::new(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging. stdout only ever carries the address.
    let log_level: String = config.get_log_level();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(format!(
            "{},hyper_util=error,hyper=error,reqwest=error,rustls=error",
            log_level
        ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    info!("⚙️ Settings have been loaded from {:?}", config.config_path);

    if let Err(e) = run(&cli, config.get_settings(), &mut io::stdout()).await {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
