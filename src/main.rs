use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sixpack_creator::adapters::catalog::load_program;
use sixpack_creator::app::{build_app, AppDependencies};
use sixpack_creator::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration error");
        return Err(e.into());
    }

    let program = load_program(config.catalog.path()).await?;
    let deps = AppDependencies::from_config(program, &config.storage);
    let app = build_app(&deps, &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        "Sixpack Creator listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
