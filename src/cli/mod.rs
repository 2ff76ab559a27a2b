//! Command-line front end: renders listings, conversions and rate differences

pub mod convert;
pub mod currencies;
pub mod diff;
pub mod setup;
pub mod ui;
