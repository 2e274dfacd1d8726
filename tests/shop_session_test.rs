use anyhow::Result;
use cookie_shop::core::catalog::parse_catalog;
use cookie_shop::{CookieShop, ShopError, TerminalConsole};
use rust_decimal::Decimal;
use std::io::Cursor;
use std::str::FromStr;

const CATALOG: &str = "id,title,description,price\n\
1,Basboosa Semolina Cake,Soaked in a rose water syrup.,$3.99\n\
2,Vanilla Chai Cookie,Crisp with a smooth inside.,$5.50\n";

const ORDER_PROMPT: &str = "Enter the id of a cookie you want to order (or 'finished', 'done', 'quit', 'exit' to finish): ";

fn run_session(input: &str) -> Result<(Decimal, String)> {
    let catalog = parse_catalog(CATALOG.as_bytes(), "$")?;
    let console = TerminalConsole::new(Cursor::new(input.to_string()), Vec::new());

    let mut shop = CookieShop::new(catalog, console);
    let receipt = shop.run()?;
    let transcript = String::from_utf8(shop.into_console().into_writer())?;

    Ok((receipt.total, transcript))
}

#[test]
fn test_full_transcript() -> Result<()> {
    let (total, transcript) = run_session("1\n2\ndone\n")?;

    assert_eq!(total, Decimal::from_str("7.98")?);

    let expected = format!(
        "Welcome to the Python Cookie Shop!\n\
We feed each according to their need.\n\n\
Here are the cookies we have in the shop for you:\n\n\
#1 - Basboosa Semolina Cake\n\
Soaked in a rose water syrup.\n\
Price: $3.99\n\n\
#2 - Vanilla Chai Cookie\n\
Crisp with a smooth inside.\n\
Price: $5.50\n\n\
{prompt}\
My favorite! How many Basboosa Semolina Cake would you like? \
Your subtotal for 2 Basboosa Semolina Cake is $7.98.\n\
{prompt}\
Thank you for your order. You have ordered:\n\n\
-2 Basboosa Semolina Cake\n\n\
Your total is $7.98.\n\
Please pay with Bitcoin before picking-up.\n\n\
Thank you!\n\
-The Python Cookie Shop Robot.\n",
        prompt = ORDER_PROMPT
    );
    assert_eq!(transcript, expected);
    Ok(())
}

#[test]
fn test_retries_and_repeated_lines() -> Result<()> {
    let (total, transcript) = run_session("7\n2\nmany\n0\n3\n1\n1\n2\n1\nFinished\n")?;

    // 3 × 5.50 + 1 × 3.99 + 1 × 5.50
    assert_eq!(total, Decimal::from_str("25.99")?);
    assert_eq!(transcript.matches("Invalid cookie id. Please try again.").count(), 1);
    assert_eq!(
        transcript
            .matches("Invalid input. Please enter a valid number.")
            .count(),
        2
    );
    assert!(transcript.contains("Your subtotal for 3 Vanilla Chai Cookie is $16.50."));
    assert!(transcript.contains("-3 Vanilla Chai Cookie\n-1 Basboosa Semolina Cake\n-1 Vanilla Chai Cookie\n"));
    assert!(transcript.contains("Your total is $25.99."));
    Ok(())
}

#[test]
fn test_immediate_exit_prints_empty_receipt() -> Result<()> {
    let (total, transcript) = run_session("  EXIT  \n")?;

    assert_eq!(total, Decimal::ZERO);
    assert!(transcript.contains("You have ordered:\n\n\nYour total is $0.00."));
    Ok(())
}

#[test]
fn test_end_of_input_still_prints_receipt() -> Result<()> {
    let (total, transcript) = run_session("2\n4\n")?;

    assert_eq!(total, Decimal::from(22));
    assert!(transcript.ends_with("-The Python Cookie Shop Robot.\n"));
    assert!(transcript.contains("Your total is $22.00."));
    Ok(())
}

#[test]
fn test_unparseable_price_fails_at_subtotal() -> Result<()> {
    let data = "id,title,description,price\n1,Free Sample,Ask at the counter.,gratis\n";
    let catalog = parse_catalog(data.as_bytes(), "$")?;
    let console = TerminalConsole::new(Cursor::new("1\n1\ndone\n"), Vec::new());

    let mut shop = CookieShop::new(catalog, console);
    let err = shop.run().unwrap_err();

    assert!(matches!(err, ShopError::InvalidPrice { ref raw, .. } if raw == "gratis"));
    assert!(err.report().starts_with("❌ Cookie #1 has a price we cannot read\n"));
    let transcript = String::from_utf8(shop.into_console().into_writer())?;
    assert!(transcript.contains("Price: $gratis"));
    Ok(())
}
