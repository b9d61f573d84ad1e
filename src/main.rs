//! VascularAI dashboard API entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vascular_api::api::{create_router, ApiDoc, AppState};
use vascular_api::catalog::{Catalog, API_VERSION};
use vascular_api::config::Config;
use vascular_api::Result;
use vascular_api::utils::shutdown_signal;

/// VascularAI dashboard API server.
#[derive(Parser, Debug)]
#[command(name = "vascular-api")]
#[command(about = "Demo data API for the VascularAI dashboard")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Bind address, overrides HOST.
        #[arg(long)]
        host: Option<String>,

        /// Bind port, overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let config = Config::load()?;

    // Initialize logging
    init_tracing(&config, args.verbose);

    // Handle subcommands
    match args.command {
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await?,
        Some(Command::CheckConfig) => cmd_check_config(&config)?,
        Some(Command::Openapi) => cmd_openapi()?,
        None => cmd_serve(config, None, None).await?,
    }

    Ok(())
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vascular_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
async fn cmd_serve(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let addr = config.socket_addr()?;
    let catalog = Catalog::demo();
    catalog.check_integrity()?;
    info!(
        version = API_VERSION,
        patients = catalog.patients().len(),
        "Catalog loaded"
    );

    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(AppState::with_catalog(catalog));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> Result<()> {
    println!("======================================================================");
    println!("VASCULARAI API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(e);
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  Log Level: {}", config.log_level);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> Result<()> {
    let doc = ApiDoc::to_pretty_json()?;
    println!("{doc}");
    Ok(())
}
