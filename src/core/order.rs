use crate::core::catalog::find_product;
use crate::domain::model::{OrderLine, Product};
use crate::domain::ports::Console;
use crate::utils::error::Result;
use crate::utils::validation::parse_positive_int;

/// Raw input matching one of these ends the order (case-sensitive, no
/// trimming, so "Exit" or "exit " are just invalid ids and re-prompt).
const ORDER_DONE_WORDS: [&str; 4] = ["finished", "done", "quit", "exit"];

/// Takes the complete order from the customer.
///
/// Re-prompts silently on anything that is not a terminating keyword, a
/// positive integer, or a known product id. Returns the accumulated lines in
/// the order they were entered; duplicate ids stay as separate lines.
pub fn solicit_order<C: Console>(console: &mut C, catalog: &[Product]) -> Result<Vec<OrderLine>> {
    let mut order = Vec::new();
    loop {
        let input =
            console.prompt("Please enter the number of any cookie you would like to purchase: ")?;

        if ORDER_DONE_WORDS.contains(&input.as_str()) {
            tracing::debug!("order finished with {} line items", order.len());
            return Ok(order);
        }

        let requested = match parse_positive_int(&input) {
            Some(value) => value,
            None => continue,
        };
        // Ids outside u32 cannot exist in the catalog; treat like any other
        // unknown id.
        let id = match u32::try_from(requested) {
            Ok(id) => id,
            Err(_) => continue,
        };
        let product = match find_product(catalog, id) {
            Some(product) => product,
            None => continue,
        };

        let quantity = solicit_quantity(console, product)?;
        order.push(OrderLine {
            product_id: id,
            quantity,
        });
    }
}

/// Asks how many of `product` the customer wants and prints the subtotal.
///
/// The caller has already resolved the product, so "id must exist" holds by
/// construction. Re-prompts until the answer is a positive integer.
pub fn solicit_quantity<C: Console>(console: &mut C, product: &Product) -> Result<i64> {
    let quantity = loop {
        let answer = console.prompt(&format!(
            "My favorite! How many {} would you like? ",
            product.title
        ))?;
        if let Some(quantity) = parse_positive_int(&answer) {
            break quantity;
        }
    };

    let subtotal = product.price * quantity;
    console.write_line(&format!(
        "Your subtotal for {} {} is {}",
        quantity, product.title, subtotal
    ))?;
    Ok(quantity)
}
