use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog data error: {message}")]
    DataError { message: String },

    #[error("Order processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, ShopError>;

impl ShopError {
    /// Short message suitable for printing to the customer on stderr,
    /// without Rust error-chain noise.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::CsvError(err) => {
                format!("The catalog file could not be parsed: {}", err)
            }
            ShopError::IoError(err) => format!("An input/output operation failed: {}", err),
            ShopError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!(
                "The argument '{}' has an invalid value '{}': {}",
                field, value, reason
            ),
            ShopError::DataError { message } => {
                format!("The catalog file contains bad data: {}", message)
            }
            ShopError::ProcessingError { message } => {
                format!("The order could not be processed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShopError::CsvError(_) | ShopError::DataError { .. } => {
                "Check that the data file has a header row and 7 comma-separated columns per product"
            }
            ShopError::IoError(_) => "Check that the data file exists and is readable",
            ShopError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
            ShopError::ProcessingError { .. } => {
                "This indicates a bug in the shop itself; please report it"
            }
        }
    }
}
