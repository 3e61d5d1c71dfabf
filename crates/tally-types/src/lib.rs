//! Tally Types
//!
//! This crate defines the data model shared across the Tally workspace
//! (currently `tally-calculator` and `tally-prelude`): the order rows a user
//! edits, the request handed to the allocation engine, and the per-order
//! breakdown it produces.

#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;
pub use types::{AllocationRequest, CalculatedOrder, CalculationResult, OrderEntry};
