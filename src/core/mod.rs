//! Core abstractions: the exchange contract, its errors, config and logging

pub mod config;
pub mod error;
pub mod exchange;
pub mod log;

// Re-export main types for cleaner imports
pub use error::ExchangeError;
pub use exchange::{ConversionRequest, ConversionResult, Credential, ExchangeProvider, ProviderKind};
