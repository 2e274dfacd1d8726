use crate::core::intake::OrderIntake;
use crate::core::{presentation, receipt};
use crate::domain::model::{Catalog, Receipt};
use crate::domain::ports::Console;
use crate::utils::error::Result;

pub struct CookieShop<C: Console> {
    catalog: Catalog,
    console: C,
}

impl<C: Console> CookieShop<C> {
    pub fn new(catalog: Catalog, console: C) -> Self {
        Self { catalog, console }
    }

    /// welcome → catalog → order intake → receipt
    pub fn run(&mut self) -> Result<Receipt> {
        tracing::info!("Opening shop with {} cookie(s)", self.catalog.len());

        self.console.say(&presentation::welcome())?;
        self.console.say(&presentation::display(&self.catalog))?;

        let order = OrderIntake::new(&self.catalog, &mut self.console).solicit_order()?;

        let receipt = receipt::tally(&order, &self.catalog)?;
        self.console.say(&presentation::receipt(&receipt))?;

        tracing::info!("Receipt printed, total {}", receipt.total);
        Ok(receipt)
    }

    pub fn into_console(self) -> C {
        self.console
    }
}
