use anyhow::{bail, Context, Result};
use clap::Parser;
use guardian_ward::{AutoGrantPermissions, CaptureFactory, Config, NsdRegistrar, WardSession};
use tracing::{info, warn};

/// Ward-side daemon: advertises this device to guardians on the local
/// network and streams microphone audio to whichever guardian connects.
#[derive(Debug, Parser)]
#[command(name = "guardian-ward", version)]
struct Args {
    /// Configuration file (extension optional)
    #[arg(long, default_value = "config/guardian-ward")]
    config: String,

    /// Override the advertised port
    #[arg(long)]
    port: Option<u16>,

    /// Override the advertised device name
    #[arg(long)]
    device_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut cfg = Config::load(&args.config)?;
    if let Some(port) = args.port {
        cfg.service.port = port;
    }
    if let Some(name) = args.device_name {
        cfg.service.device_name = name;
    }

    info!(device_name = %cfg.service.device_name, "guardian-ward v0.1.0");

    let discovery = Box::new(NsdRegistrar::new(cfg.service.device_name.clone()));
    let capture = CaptureFactory::detect();
    if let Some(reason) = capture.unavailable_reason() {
        warn!("running without audio capture: {reason}");
    }

    let session = WardSession::new(discovery, capture, Box::new(AutoGrantPermissions));

    if !session.start(cfg.session_config()).await {
        bail!("could not begin ward session");
    }

    info!(
        "session status: {}",
        serde_json::to_string(&session.status())?
    );
    info!("press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    session.stop().await;

    info!(
        "final session stats: {}",
        serde_json::to_string(&session.stats())?
    );

    Ok(())
}
