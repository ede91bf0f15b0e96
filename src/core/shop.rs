use crate::core::{display, order, prefs, receipt};
use crate::domain::model::{OrderLine, Product};
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Runs the shop session end to end: preferences, filtered listing, order
/// collection, receipt. Each stage hands its output to the next as an
/// explicit argument; the engine owns the catalog and the console for the
/// whole session.
pub struct ShopEngine<C: Console> {
    catalog: Vec<Product>,
    console: C,
}

impl<C: Console> ShopEngine<C> {
    pub fn new(catalog: Vec<Product>, console: C) -> Self {
        Self { catalog, console }
    }

    pub fn run(&mut self) -> Result<Vec<OrderLine>> {
        tracing::debug!("collecting dietary preferences");
        let preferences = prefs::collect_preferences(&mut self.console)?;
        tracing::debug!("preferences: {:?}", preferences);

        display::present_catalog(&mut self.console, &self.catalog, &preferences)?;

        tracing::debug!("taking the order");
        let order = order::solicit_order(&mut self.console, &self.catalog)?;

        tracing::debug!("printing the receipt for {} line items", order.len());
        receipt::print_receipt(&mut self.console, &order, &self.catalog)?;

        Ok(order)
    }

    /// Hands the console back, e.g. so tests can inspect the transcript.
    pub fn into_console(self) -> C {
        self.console
    }
}
