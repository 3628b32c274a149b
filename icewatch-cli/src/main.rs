//! Icewatch CLI
//!
//! Runs the sea-ice API server or takes a one-off status snapshot.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use icewatch_api::{ApiConfig, ApiServer};
use icewatch_core::clock::SystemClock;
use icewatch_core::constants::{DEFAULT_PORT, STATUS_CACHE_TTL};
use icewatch_core::types::ExtentReading;
use icewatch_nsidc::{IceDataFetcher, NsidcConfig};

/// Icewatch - Real-time polar sea-ice monitor
#[derive(Parser)]
#[command(name = "icewatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Fetch current status for both hemispheres once and print it
    Snapshot {
        /// Also write the snapshot as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind, cli.verbose).await,
        Commands::Snapshot { output } => cmd_snapshot(output, cli.verbose).await,
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "icewatch=debug,tower_http=debug,info"
    } else {
        "icewatch=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_banner(bind: &str, port: u16) {
    let hours = STATUS_CACHE_TTL.as_secs() / 3600;

    println!();
    println!("   {}", "╔════════════════════════════════════════════════════════╗".cyan());
    println!("   {}   {}   {}", "║".cyan(), "Polar Ice Sheet Real-Time Monitoring System".bold(), "      ║".cyan());
    println!("   {}", "╚════════════════════════════════════════════════════════╝".cyan());
    println!();
    println!("   {} http://{}:{}", "🌐 Server starting on".green(), bind, port);
    println!("   {}", "📊 API endpoints available:".yellow().bold());
    for (route, what) in [
        ("GET /api/status", "Full ice sheet status"),
        ("GET /api/current", "Current extent both hemispheres"),
        ("GET /api/monthly/<hem>", "Monthly data"),
        ("GET /api/historical/<hem>", "Historical comparison"),
        ("GET /api/health", "Health check"),
        ("GET /api/refresh", "Force cache refresh"),
    ] {
        println!("      - {:<27} {}", route, format!("({})", what).dimmed());
    }
    println!();
    println!("   {} {} hours", "🔄 Data refresh interval:".cyan(), hours);
    println!("\n   Press Ctrl+C to stop.\n");
}

/// Run API server
async fn cmd_serve(port: u16, bind: &str, verbose: bool) -> Result<()> {
    let mut config = ApiConfig::from_env().context("Invalid server configuration")?;
    config.port = port;
    init_logging(verbose || config.debug);

    print_banner(bind, port);

    let server = ApiServer::new(config).context("Failed to initialize server")?;
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", bind, port))?;
    server.run(addr).await?;

    Ok(())
}

fn print_reading(reading: &ExtentReading) {
    let label = format!("{} Ice Extent:", reading.hemisphere.label());
    println!(
        "   {:<22} {:.2} million km²  {}",
        label.bold(),
        reading.extent_million_km2,
        format!("(area {:.2})", reading.area_million_km2).dimmed()
    );
}

/// Fetch and print the current status
async fn cmd_snapshot(output: Option<PathBuf>, verbose: bool) -> Result<()> {
    init_logging(verbose);
    println!("{}", "❄️  Polar Ice Sheet Monitor".cyan().bold());

    let config = NsidcConfig::from_env().context("Invalid upstream configuration")?;
    debug!(upstream = %config.base_url, "Fetching snapshot");
    let fetcher = IceDataFetcher::new(config, Arc::new(SystemClock))
        .context("Failed to build upstream client")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("   {spinner:.cyan} {msg}")?);
    spinner.set_message("Fetching real-time data...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let status = fetcher.get_ice_sheet_status().await;
    spinner.finish_and_clear();

    println!();
    print_reading(&status.arctic);
    print_reading(&status.antarctic);

    let source_line = if status.has_placeholder() {
        status.arctic.data_source.yellow()
    } else {
        status.arctic.data_source.green()
    };
    println!("\n   {} {}", "Data Source:".dimmed(), source_line);
    println!("   {} {}", "Last Updated:".dimmed(), status.last_updated.to_rfc3339());

    let stats = fetcher.stats();
    println!(
        "   {} {} live, {} placeholder",
        "Responses:".dimmed(),
        stats.live(),
        stats.placeholder()
    );

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&status)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n{} {}", "✅ Data saved to:".green(), path.display());
    }

    Ok(())
}
