// Standard library
use std::error::Error;
use std::io::Write;
use std::time::Duration;

// 3rd party crates
use tracing::{debug, info};

// Project imports
use crate::cli::Cli;
use crate::providers::functions::build_registry;
use crate::settings::types::Settings;
use crate::utility::http::create_client;
use crate::utility::info_log::SharedInfoLog;
use crate::utility::ip_detector::types::IpDetector;

/// Looks up the public IP address and writes it to `out`.
///
/// In verbose mode the info log follows the address on its own line.
/// A successful lookup is followed by the configured pause, so that
/// scripted invocations do not flood the providers.
pub async fn run<W: Write>(
    cli: &Cli,
    settings: &Settings,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let client = create_client(&settings.http)?;
    let providers = build_registry(&settings.providers, &client);
    let quorum: usize = cli.quorum.unwrap_or(settings.consensus.quorum);

    info!(
        "🧩 Querying {} providers, {} must agree",
        providers.len(),
        quorum
    );

    let info_log = SharedInfoLog::new();
    let detector = IpDetector::new(providers, info_log.clone());

    // Ensure to clear the log before the run
    info_log.clear().await;
    let ip: String = detector.resolve(quorum).await?;

    write!(out, "{}", ip)?;
    if cli.verbose {
        write!(out, "\n{}", info_log.get().await)?;
    }
    out.flush()?;

    debug!("Pausing for {} seconds", settings.consensus.pause_secs);
    tokio::time::sleep(Duration::from_secs(settings.consensus.pause_secs)).await;

    Ok(())
}
