use crate::domain::money::Money;
use serde::{Deserialize, Serialize};

/// One catalog entry, loaded from the data file at startup and never mutated.
///
/// Dietary flags whose source text is neither `True` nor `False` load as
/// `false` ("not flagged"), so a product with unreadable flags is treated as
/// unsafe for restricted diets rather than crashing downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: Money,
    pub sugar_free: bool,
    pub gluten_free: bool,
    pub contains_nuts: bool,
}

/// Dietary preferences collected once per session.
///
/// A "yes" to an allergy question maps to the corresponding `can_intake_*`
/// flag being `false`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Preferences {
    pub can_intake_nuts: bool,
    pub can_intake_gluten: bool,
    pub can_intake_sugar: bool,
}

impl Preferences {
    /// Whether a product may be shown to (and ordered by) this customer.
    pub fn permits(&self, product: &Product) -> bool {
        (self.can_intake_sugar || product.sugar_free)
            && (self.can_intake_gluten || product.gluten_free)
            && (self.can_intake_nuts || !product.contains_nuts)
    }
}

/// One line of the customer's order. Lines keep insertion order and the same
/// product may appear in several lines; nothing is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: u32,
    pub quantity: i64,
}
