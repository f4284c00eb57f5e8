// Export our modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod geo;

pub use domain::{classify, risk_band, ObjectType, OrbitType, RiskBand, Tier};
