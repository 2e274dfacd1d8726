use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Decimal conversion error: {0}")]
    DecimalError(#[from] rust_decimal::Error),

    #[error("Malformed catalog record on line {line}: expected 4 fields, found {found}")]
    MalformedRecord { line: u64, found: usize },

    #[error("Invalid price '{raw}' for cookie #{id}")]
    InvalidPrice { id: String, raw: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ShopError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::IoError(e) => format!("Could not read a file: {}", e),
            ShopError::CsvError(e) => format!("The cookie catalog could not be parsed: {}", e),
            ShopError::MalformedRecord { line, .. } => {
                format!("The cookie catalog has a broken entry on line {}", line)
            }
            ShopError::InvalidPrice { id, .. } => {
                format!("Cookie #{} has a price we cannot read", id)
            }
            ShopError::DecimalError(_) => "A price calculation overflowed".to_string(),
            ShopError::ConfigError { .. } | ShopError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }

    /// stderr 上顯示的兩行錯誤報告
    pub fn report(&self) -> String {
        format!(
            "❌ {}\n💡 {}",
            self.user_friendly_message(),
            self.recovery_suggestion()
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShopError::IoError(_) => "Check that the catalog path exists and is readable",
            ShopError::CsvError(_) | ShopError::MalformedRecord { .. } => {
                "Each line after the header must be id,title,description,price with no extra commas"
            }
            ShopError::InvalidPrice { .. } => {
                "Prices must be a currency symbol followed by a number, e.g. $3.99"
            }
            ShopError::DecimalError(_) => "Order a smaller quantity",
            ShopError::ConfigError { .. } | ShopError::InvalidConfigValueError { .. } => {
                "Fix the flagged value in the config file or command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
