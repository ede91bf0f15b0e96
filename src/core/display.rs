use crate::domain::model::{Preferences, Product};
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Prints the products this customer may eat, in catalog order.
///
/// Suppressed products produce no output at all. The function reads its
/// inputs without mutating them, so presenting twice prints the same thing.
pub fn present_catalog<C: Console>(
    console: &mut C,
    catalog: &[Product],
    prefs: &Preferences,
) -> Result<()> {
    console.write_line("Here are the cookies we have in the shop for you:")?;
    console.write_line("")?;

    for product in catalog.iter().filter(|p| prefs.permits(p)) {
        console.write_line(&format!("#{} - {}", product.id, product.title))?;
        console.write_line(&product.description)?;
        console.write_line(&format!("Price: {}", product.price))?;
        console.write_line("")?;
    }

    Ok(())
}
