use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use cookie_shop::core::CatalogSource;
use cookie_shop::utils::logger;
use cookie_shop::{CliConfig, CookieShop, ShopError, TerminalConsole};

fn report(e: &ShopError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.report());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let config = cli.resolve().unwrap_or_else(|e| report(&e));

    let catalog = config.catalog_source().load().unwrap_or_else(|e| report(&e));

    let mut shop = CookieShop::new(catalog, TerminalConsole::stdio());
    if let Err(e) = shop.run() {
        report(&e);
    }

    io::stdout().flush().context("Failed to flush stdout")?;

    Ok(())
}
