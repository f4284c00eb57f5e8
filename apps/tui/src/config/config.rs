use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Resolves the debris data file location.
/// CLI overrides are exported as DEBRIS_PATH before this runs.
pub fn debris_data_path() -> PathBuf {
    // Load environment variables from .env file
    dotenv().ok();

    env::var("DEBRIS_PATH").map_or_else(|_| PathBuf::from("./debris.json"), PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok()
}
