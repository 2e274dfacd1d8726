use crate::config::toml_config::ShopConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cookie-shop")]
#[command(about = "Order cookies from the shop catalog")]
pub struct CliConfig {
    /// Path to the catalog CSV (overrides the config file)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<ShopConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                ShopConfig::from_file(path)?
            }
            None => ShopConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            tracing::debug!("Catalog path overridden to: {}", catalog);
            config.catalog.path = catalog.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
