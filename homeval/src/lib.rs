pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testing;

// Re-export common types
pub use error::PredictionError;
