use crate::core::catalog::find;
use crate::core::presentation;
use crate::domain::model::{Catalog, Order};
use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::num::NonZeroU32;

pub const TERMINATION_TOKENS: [&str; 4] = ["finished", "done", "quit", "exit"];

/// Result of asking for a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    Accepted(NonZeroU32),
    /// The id did not resolve; nothing was asked.
    NotFound,
    InputClosed,
}

/// Trimmed, case-folded match against the termination tokens.
pub fn is_termination(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    TERMINATION_TOKENS.contains(&normalized.as_str())
}

/// Only ASCII digits, value > 0 and within `u32`.
pub fn parse_quantity(input: &str) -> Option<NonZeroU32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<u32>().ok().and_then(NonZeroU32::new)
}

pub struct OrderIntake<'c, 'io, C: Console> {
    catalog: &'c Catalog,
    console: &'io mut C,
}

impl<'c, 'io, C: Console> OrderIntake<'c, 'io, C> {
    pub fn new(catalog: &'c Catalog, console: &'io mut C) -> Self {
        Self { catalog, console }
    }

    /// Collects order lines until a termination token or end of input.
    pub fn solicit_order(&mut self) -> Result<Order<'c>> {
        let mut order = Order::default();

        loop {
            let Some(raw) = self.console.prompt(presentation::ORDER_PROMPT)? else {
                tracing::info!("Input closed, finishing order");
                break;
            };

            if is_termination(&raw) {
                break;
            }

            let id = raw.trim().to_lowercase();
            let Some(cookie) = find(&id, self.catalog) else {
                tracing::debug!("Rejected cookie id '{}'", id);
                self.console.say(presentation::INVALID_ID)?;
                continue;
            };

            match self.solicit_quantity(&cookie.id)? {
                QuantityOutcome::Accepted(quantity) => order.push(&cookie.id, quantity),
                QuantityOutcome::NotFound => {}
                QuantityOutcome::InputClosed => {
                    tracing::info!("Input closed while asking for a quantity, dropping #{}", id);
                    break;
                }
            }
        }

        tracing::info!("Order complete with {} line(s)", order.lines.len());
        Ok(order)
    }

    /// Re-prompts until a positive integer is entered, then reports the subtotal.
    pub fn solicit_quantity(&mut self, id: &str) -> Result<QuantityOutcome> {
        let Some(cookie) = find(id, self.catalog) else {
            tracing::warn!("solicit_quantity called with unknown id '{}'", id);
            self.console.say(presentation::COOKIE_NOT_FOUND)?;
            return Ok(QuantityOutcome::NotFound);
        };

        let prompt = presentation::quantity_prompt(cookie);
        let quantity = loop {
            let Some(raw) = self.console.prompt(&prompt)? else {
                return Ok(QuantityOutcome::InputClosed);
            };
            match parse_quantity(&raw) {
                Some(quantity) => break quantity,
                None => self.console.say(presentation::INVALID_QUANTITY)?,
            }
        };

        let subtotal = cookie.cost_of(quantity)?;
        self.console
            .say(&presentation::subtotal(quantity, cookie, subtotal))?;

        Ok(QuantityOutcome::Accepted(quantity))
    }
}
