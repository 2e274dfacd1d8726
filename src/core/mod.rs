pub mod catalog;
pub mod intake;
pub mod presentation;
pub mod receipt;
pub mod shop;

pub use crate::domain::model::{Catalog, Cookie, Order, OrderLine, Price, Receipt};
pub use crate::domain::ports::{CatalogSource, Console};
pub use crate::utils::error::Result;
