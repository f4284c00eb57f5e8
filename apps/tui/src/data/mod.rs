// Data module for clearorbit-tui
// Loading and summarizing the pre-computed debris collection

pub mod loader;
pub mod models;
pub mod stats;

pub use loader::{load_debris, parse_debris, DataError};
pub use models::{sorted_by_urgency, DebrisObject};
pub use stats::{summarize, DebrisStats};
