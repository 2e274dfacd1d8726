//! Renders every fixed piece of shop text. Nothing here writes to the terminal.

use crate::domain::model::{Catalog, Cookie, Money, Price, Receipt};
use rust_decimal::Decimal;
use std::num::NonZeroU32;

pub const ORDER_PROMPT: &str = "Enter the id of a cookie you want to order (or 'finished', 'done', 'quit', 'exit' to finish): ";
pub const INVALID_ID: &str = "Invalid cookie id. Please try again.";
pub const INVALID_QUANTITY: &str = "Invalid input. Please enter a valid number.";
pub const COOKIE_NOT_FOUND: &str = "Cookie not found.";

pub fn welcome() -> String {
    "Welcome to the Python Cookie Shop!\nWe feed each according to their need.\n".to_string()
}

pub fn display(catalog: &Catalog) -> String {
    let mut out = String::from("Here are the cookies we have in the shop for you:\n");

    for cookie in catalog.cookies() {
        out.push('\n');
        out.push_str(&format!("#{} - {}\n", cookie.id, cookie.title));
        out.push_str(&format!("{}\n", cookie.description));
        out.push_str(&format!("Price: ${}\n", format_price(&cookie.price)));
    }

    out
}

pub fn format_price(price: &Price) -> String {
    match price {
        Price::Amount(amount) => Money(*amount).to_string(),
        Price::Unparsed(raw) => raw.clone(),
    }
}

pub fn quantity_prompt(cookie: &Cookie) -> String {
    format!("My favorite! How many {} would you like? ", cookie.title)
}

pub fn subtotal(quantity: NonZeroU32, cookie: &Cookie, subtotal: Decimal) -> String {
    format!(
        "Your subtotal for {} {} is ${}.",
        quantity,
        cookie.title,
        Money(subtotal)
    )
}

pub fn receipt(receipt: &Receipt) -> String {
    let mut out = String::from("Thank you for your order. You have ordered:\n\n");

    for line in &receipt.lines {
        out.push_str(&format!("-{} {}\n", line.quantity, line.title));
    }

    out.push_str(&format!("\nYour total is ${}.\n", Money(receipt.total)));
    out.push_str("Please pay with Bitcoin before picking-up.\n\n");
    out.push_str("Thank you!\n-The Python Cookie Shop Robot.");
    out
}
