use spider_rainbow::health::start_health_server;
use spider_rainbow::startup::ServerConfig;

use color_eyre::Result;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("spider-rainbow {}", VERSION);
        std::process::exit(0);
    }

    let started_at = Instant::now();

    color_eyre::install()?;
    init_tracing();

    let config = ServerConfig::from_env()?.apply_args(std::env::args().skip(1))?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let (handle, _addr) = start_health_server(&config, started_at).await?;
        handle.await?;
        Ok::<(), color_eyre::Report>(())
    })
}
