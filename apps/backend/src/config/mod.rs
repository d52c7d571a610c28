//! Environment-driven configuration.

pub mod engine;
