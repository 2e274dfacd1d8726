use crate::utils::error::{Result, ShopError};
use rust_decimal::Decimal;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// A catalog price, parsed once when the catalog is loaded.
///
/// Loading never fails on a bad price: text that is not a number after the
/// currency symbol is kept verbatim as `Unparsed` and only becomes an error
/// when something needs the amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    Amount(Decimal),
    Unparsed(String),
}

impl Price {
    /// 去掉貨幣符號後轉成 Decimal，失敗則保留原字串
    pub fn parse(raw: &str, currency_symbol: &str) -> Self {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix(currency_symbol).unwrap_or(trimmed).trim();

        match Decimal::from_str(digits) {
            Ok(amount) => Price::Amount(amount),
            Err(_) => Price::Unparsed(raw.to_string()),
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Price::Amount(amount) => Some(*amount),
            Price::Unparsed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Price,
}

impl Cookie {
    /// Price × quantity. Fails if the price never parsed.
    pub fn cost_of(&self, quantity: NonZeroU32) -> Result<Decimal> {
        match &self.price {
            Price::Amount(price) => price
                .checked_mul(Decimal::from(quantity.get()))
                .ok_or(ShopError::DecimalError(
                    rust_decimal::Error::ExceedsMaximumPossibleValue,
                )),
            Price::Unparsed(raw) => Err(ShopError::InvalidPrice {
                id: self.id.clone(),
                raw: raw.clone(),
            }),
        }
    }
}

/// Cookies in file order. Ids are expected to be unique; lookups take the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cookies: Vec<Cookie>,
}

impl Catalog {
    pub fn new(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine<'a> {
    pub id: &'a str,
    pub quantity: NonZeroU32,
}

/// One line per accepted id entry; repeated ids are not merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order<'a> {
    pub lines: Vec<OrderLine<'a>>,
}

impl<'a> Order<'a> {
    pub fn push(&mut self, id: &'a str, quantity: NonZeroU32) {
        self.lines.push(OrderLine { id, quantity });
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub quantity: NonZeroU32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: Decimal,
}

/// Two fraction digits, ties to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven);
        write!(f, "{:.2}", rounded)
    }
}
