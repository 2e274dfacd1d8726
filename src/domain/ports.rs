use crate::domain::model::Catalog;
use crate::utils::error::Result;

/// Line-oriented terminal the shop talks through.
pub trait Console {
    /// Shows `prompt` without a newline and reads one line.
    /// The line terminator is stripped; `None` means input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Writes `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<()>;
}

pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;
}
