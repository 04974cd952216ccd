//! Business valuation HTTP server.

use std::process::ExitCode;

use tracing::{error, info};

use business_valuation::adapters::http::{app_router, ValuationAppState};
use business_valuation::config::AppConfig;
use business_valuation::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.server.log_level, config.is_production());

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server terminated");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = config.valuation.build_engine()?;
    let addr = config.server.socket_addr()?;

    info!(
        sectors = engine.tables().sectors().count(),
        forecast_years = engine.assumptions().forecast_years,
        "Valuation engine ready"
    );

    let app = app_router(ValuationAppState::new(engine), &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
