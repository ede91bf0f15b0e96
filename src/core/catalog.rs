use crate::domain::model::Product;
use crate::domain::money::Money;
use crate::utils::error::{Result, ShopError};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// id, title, description, price, sugar_free, gluten_free, contains_nuts
const CATALOG_FIELDS: usize = 7;

/// Loads the product catalog from a comma-delimited file.
///
/// The first record is a header and is discarded. Records wider than seven
/// fields have the extras ignored; narrower records, unparseable ids or
/// prices, and unreadable files are all fatal. Source order is preserved.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut catalog = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Header occupies row 1 of the file.
        let row = index + 2;

        if record.len() < CATALOG_FIELDS {
            return Err(ShopError::DataError {
                message: format!(
                    "row {} has {} fields, expected {}",
                    row,
                    record.len(),
                    CATALOG_FIELDS
                ),
            });
        }

        let id = record[0]
            .trim()
            .parse::<u32>()
            .map_err(|err| ShopError::DataError {
                message: format!("row {}: invalid product id '{}': {}", row, &record[0], err),
            })?;

        let price = parse_price(&record[3]).ok_or_else(|| ShopError::DataError {
            message: format!("row {}: invalid price '{}'", row, &record[3]),
        })?;

        catalog.push(Product {
            id,
            title: record[1].to_string(),
            description: record[2].to_string(),
            price,
            sugar_free: parse_flag(&record[4], "sugar_free", id),
            gluten_free: parse_flag(&record[5], "gluten_free", id),
            contains_nuts: parse_flag(&record[6], "contains_nuts", id),
        });
    }

    tracing::debug!("loaded {} products from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The price field carries a one-character currency symbol (`$3.99`); the
/// first character is stripped unconditionally before the decimal parse.
fn parse_price(field: &str) -> Option<Money> {
    let mut chars = field.chars();
    chars.next()?;
    Money::parse_decimal(chars.as_str())
}

/// Dietary flags are the literal strings `True`/`False` (case-sensitive).
/// Anything else loads as "not flagged".
fn parse_flag(field: &str, name: &str, id: u32) -> bool {
    match field {
        "True" => true,
        "False" => false,
        other => {
            tracing::warn!(
                "product {}: unrecognized {} value '{}', treating as not flagged",
                id,
                name,
                other
            );
            false
        }
    }
}

/// Linear scan of the catalog by product id.
pub fn find_product(catalog: &[Product], id: u32) -> Option<&Product> {
    catalog.iter().find(|product| product.id == id)
}
