use anyhow::Result;
use memocal::config::Config;
use memocal::logger::Logger;
use memocal::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;
    logger.log("Starting memocal-clock".to_string());

    ui::run_clock(config).await
}
