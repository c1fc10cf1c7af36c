//! Tickex scanning client.
//!
//! Acquire a frame source, poll it for a QR payload, verify the payload
//! against the server, print the outcome. Manual entry bypasses the
//! camera entirely.

use std::path::PathBuf;

use clap::Parser;
use tickex_core::{
    CameraConstraints, DecodeCapability, FacingMode, ScanEngine, ScanError,
};
use tickex_model::ScanReport;
use tickex_scanner::{ApiClient, StillCamera};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "tickex-scanner")]
#[command(about = "Camera scanning client for the Tickex demo")]
struct Cli {
    /// Base URL of the verification server
    #[arg(
        long,
        env = "TICKEX_SERVER_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    server: String,

    /// Image files to use as camera frames, in capture order
    #[arg(long = "frame", value_name = "PATH")]
    frames: Vec<PathBuf>,

    /// Verify a payload directly, skipping the camera
    #[arg(long, conflicts_with = "frames")]
    manual: Option<String>,

    /// Poll frames without any decode capability (degraded mode)
    #[arg(long, default_value_t = false)]
    no_decode: bool,

    /// Preferred capture width
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Preferred capture height
    #[arg(long, default_value_t = 480)]
    height: u32,
}

fn decode_capability(cli: &Cli) -> DecodeCapability {
    if cli.no_decode {
        return DecodeCapability::none();
    }
    #[cfg(feature = "qr")]
    {
        DecodeCapability::with(tickex_scanner::QrDecoder)
    }
    #[cfg(not(feature = "qr"))]
    {
        DecodeCapability::none()
    }
}

fn print_report(report: &ScanReport) {
    info!(
        scan_id = %report.scan_id,
        verified_at = %report.verified_at,
        "scan cycle complete"
    );
    println!("{}: {}", report.response.status, report.response.message);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ApiClient::new(&cli.server)?;

    if let Some(payload) = cli.manual.as_deref() {
        let mut engine = ScanEngine::new(
            StillCamera::new(Vec::new()),
            client,
            DecodeCapability::none(),
        );
        let report = engine.submit_manual(payload).await?;
        print_report(&report);
        return Ok(());
    }

    let decoder = decode_capability(&cli);
    if !decoder.is_available() {
        // Deliberate degraded mode: the loop will poll without ever
        // producing a payload.
        warn!("no decode capability; use ctrl-c to stop, or --manual");
    }

    let constraints = CameraConstraints {
        facing: FacingMode::Environment,
        ideal_width: cli.width,
        ideal_height: cli.height,
    };
    let mut engine =
        ScanEngine::new(StillCamera::new(cli.frames.clone()), client, decoder)
            .with_constraints(constraints);

    let abort = engine.abort_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("stopping scan");
            abort.stop();
        }
    });

    match engine.scan().await {
        Ok(Some(report)) => print_report(&report),
        Ok(None) => info!("scan stopped before a payload was decoded"),
        Err(err @ ScanError::CameraUnavailable(_)) => {
            anyhow::bail!("{err}; pass one or more --frame images")
        }
        Err(err) => anyhow::bail!("scan failed: {err}"),
    }

    Ok(())
}
