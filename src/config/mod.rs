use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cookie-shop")]
#[command(about = "An interactive cookie storefront over a CSV catalog")]
pub struct CliConfig {
    /// Path to the comma-delimited catalog file
    #[arg(default_value = "data/cookies.csv")]
    pub data_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}
