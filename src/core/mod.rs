//! Core business logic abstractions

pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod listing;
pub mod log;

// Re-export main types for cleaner imports
pub use client::ExchangeRateClient;
pub use currency::{ConversionRequest, Currency};
pub use error::ExchangeError;
pub use listing::CurrencyListing;
