use crate::core::catalog::find_product;
use crate::domain::model::{OrderLine, Product};
use crate::domain::money::Money;
use crate::domain::ports::Console;
use crate::utils::error::{Result, ShopError};

/// Prints the itemized receipt and grand total.
///
/// Order lines print in insertion order without aggregation. Every line's
/// product id was validated when the order was taken; failing to resolve one
/// here is an internal error, not a customer-input problem.
pub fn print_receipt<C: Console>(
    console: &mut C,
    order: &[OrderLine],
    catalog: &[Product],
) -> Result<()> {
    console.write_line("")?;
    console.write_line("Thank you for your order. You have ordered:")?;
    console.write_line("")?;

    let mut total = Money::zero();
    for line in order {
        let product =
            find_product(catalog, line.product_id).ok_or_else(|| ShopError::ProcessingError {
                message: format!("order line references unknown product id {}", line.product_id),
            })?;
        console.write_line(&format!("-{} {}", line.quantity, product.title))?;
        total += product.price * line.quantity;
    }

    console.write_line("")?;
    console.write_line(&format!("Your total is {}.", total))?;
    console.write_line("Please pay with Bitcoin before picking-up.")?;
    console.write_line("")?;
    console.write_line("Thank you!")?;
    console.write_line("-The Cookie Shop Robot.")?;
    console.write_line("")?;
    Ok(())
}
