use anyhow::{Context, Result};
use berry_cart::{
    cli::{Args, Session},
    models::Catalog,
    utils::Config,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?.with_catalog_path(args.catalog.clone());

    let level = if args.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();

    config.validate().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!("Configuration loaded for {} environment", config.environment);

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::storefront(),
    };
    tracing::info!("🫐 Berry shop open with {} items", catalog.len());

    let mut session = Session::new(catalog, &config);
    session.run()?;

    tracing::info!("🫐 Berry shop closed");
    Ok(())
}
