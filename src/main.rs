use anyhow::{Context, Result};
use memocal::config::Config;
use memocal::logger::Logger;
use memocal::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration (`memocal --generate-config` writes a fresh default)")?;

    let logger = Logger::from_config(&config.logging)?;
    logger.log("Starting memocal".to_string());

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
