mod config;

pub use config::{debris_data_path, debug_enabled};
