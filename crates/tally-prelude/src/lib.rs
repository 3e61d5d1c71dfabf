//! Tally Prelude
//!
//! This crate re-exports the most frequently used public items from the Tally
//! ecosystem (currently `tally-types` and `tally-calculator`). Down-stream
//! applications can depend on `tally-prelude` to avoid long import lists and
//! to stay insulated from internal module reshuffles. It also carries the
//! logging setup an embedding application calls once at startup.

#![deny(missing_docs)]

pub mod tracing_setup;

// Re-export the data model ----------------------------------------------------------------------

pub use tally_types::{AllocationRequest, CalculatedOrder, CalculationResult, OrderEntry};

// Calculator facade & components ----------------------------------------------------------------

pub use tally_calculator::{
    AmountParser, CalculatorConfig, InputMode, OrderBook, OrderCalculator, allocate,
    format_amount, round2, suggest,
};

// Errors ----------------------------------------------------------------------------------------

pub use tally_calculator::{AllocationError, AmountParseError, ConfigError, OrderBookError};

// Logging ---------------------------------------------------------------------------------------

pub use tracing_setup::{TracingConfig, init_tracing};

// When new crates expose stable public APIs, add re-exports here in a backwards-compatible
// manner.
