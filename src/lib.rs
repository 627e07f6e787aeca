//! Supplier scorecard library
//!
//! Computes the variables a supplier scorecard is built from: delivery,
//! receiving and quotation metrics over a supplier's purchasing records,
//! plus the supplier's manual score groups. Variable records name their
//! metric by path; paths are validated against the catalogue before save.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod migrator;
pub mod period;
pub mod services;
pub mod variables;

pub use errors::ServiceError;
pub use period::ScorecardPeriod;
pub use variables::Metric;
