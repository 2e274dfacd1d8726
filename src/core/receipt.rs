use crate::core::catalog::find;
use crate::domain::model::{Catalog, Order, Receipt, ReceiptLine};
use crate::utils::error::{Result, ShopError};
use rust_decimal::Decimal;

/// Sums price × quantity over the order in line order.
///
/// Lines whose id no longer resolves are skipped without a message.
pub fn tally(order: &Order<'_>, catalog: &Catalog) -> Result<Receipt> {
    let mut lines = Vec::with_capacity(order.lines.len());
    let mut total = Decimal::ZERO;

    for line in &order.lines {
        let Some(cookie) = find(line.id, catalog) else {
            tracing::debug!("Skipping unresolvable order line #{}", line.id);
            continue;
        };

        let cost = cookie.cost_of(line.quantity)?;
        total = total
            .checked_add(cost)
            .ok_or(ShopError::DecimalError(rust_decimal::Error::ExceedsMaximumPossibleValue))?;

        lines.push(ReceiptLine {
            quantity: line.quantity,
            title: cookie.title.clone(),
        });
    }

    Ok(Receipt { lines, total })
}
