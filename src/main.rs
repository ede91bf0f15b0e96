use clap::Parser;
use cookie_shop::core::catalog;
use cookie_shop::utils::{logger, validation::Validate};
use cookie_shop::{CliConfig, ShopEngine, StdConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cookie-shop CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let catalog = match catalog::load_catalog(&config.data_file) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog from {}: {}", config.data_file, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} products from {}", catalog.len(), config.data_file);

    let mut engine = ShopEngine::new(catalog, StdConsole::new());
    match engine.run() {
        Ok(order) => {
            tracing::info!("✅ Order completed with {} line items", order.len());
        }
        Err(e) => {
            tracing::error!("❌ Shop session failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
