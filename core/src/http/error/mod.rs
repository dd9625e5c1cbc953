//! Error types.

pub use config_error::SecurityConfigError;

pub mod config_error;
