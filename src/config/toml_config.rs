use crate::adapters::storage::CsvCatalogFile;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATALOG_PATH: &str = "data/cookies.csv";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: String,
    /// Prefix stripped from the price column before parsing. Output always prints `$`.
    pub currency_symbol: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_CATALOG_PATH.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl ShopConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShopError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShopError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHOP_DATA}); unset variables are left as written
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShopError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalog_source(&self) -> CsvCatalogFile {
        CsvCatalogFile::new(&self.catalog.path, &self.catalog.currency_symbol)
    }
}

impl Validate for ShopConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.path", &self.catalog.path)?;
        validate_non_empty_string("catalog.currency_symbol", &self.catalog.currency_symbol)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = ShopConfig::from_toml_str(
            r#"
[catalog]
path = "shop/cookies.csv"
currency_symbol = "£"
"#,
        )
        .unwrap();

        assert_eq!(config.catalog.path, "shop/cookies.csv");
        assert_eq!(config.catalog.currency_symbol, "£");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let config = ShopConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShopConfig::default());

        let config = ShopConfig::from_toml_str("[catalog]\npath = \"x.csv\"\n").unwrap();
        assert_eq!(config.catalog.currency_symbol, "$");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COOKIE_SHOP_TEST_DIR", "/srv/shop");
        let config =
            ShopConfig::from_toml_str("[catalog]\npath = \"${COOKIE_SHOP_TEST_DIR}/cookies.csv\"\n")
                .unwrap();
        assert_eq!(config.catalog.path, "/srv/shop/cookies.csv");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let config = ShopConfig::from_toml_str(
            "[catalog]\npath = \"${COOKIE_SHOP_SURELY_UNSET_VAR}.csv\"\n",
        )
        .unwrap();
        assert_eq!(config.catalog.path, "${COOKIE_SHOP_SURELY_UNSET_VAR}.csv");
    }

    #[test]
    fn test_invalid_toml() {
        let err = ShopConfig::from_toml_str("[catalog\npath = 1").unwrap_err();
        assert!(matches!(err, ShopError::ConfigError { .. }));
    }

    #[test]
    fn test_empty_currency_symbol_fails_validation() {
        let config = ShopConfig::from_toml_str("[catalog]\ncurrency_symbol = \" \"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
