//! Error types for the Tally calculator
//!
//! Every failure the calculator can report is a typed value. Callers decide
//! how to surface it; nothing in this crate halts or prompts the user.

use thiserror::Error;

/// Rejection of an allocation request.
///
/// A request that fails validation produces no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// An order amount is zero, negative or not a number
    #[error("All order amounts must be positive (order {index} has {amount})")]
    AllAmountsMustBePositive {
        /// 1-based position of the first offending order
        index: usize,
        /// The offending amount
        amount: f64,
    },

    /// The request carries no orders at all
    #[error("At least one order is required")]
    EmptyOrderList,

    /// The additional fee is negative or not finite
    #[error("Additional fee must be a finite, non-negative amount (got {0})")]
    InvalidFee(f64),

    /// The total discount is negative or not finite
    #[error("Total discount must be a finite, non-negative amount (got {0})")]
    InvalidDiscount(f64),

    /// Amounts are too large for the sums to stay finite
    #[error("Order amounts are too large to allocate")]
    AmountOverflow,
}

impl AllocationError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AllocationError::AllAmountsMustBePositive { .. } => "non_positive_amount",
            AllocationError::EmptyOrderList => "empty_order_list",
            AllocationError::InvalidFee(_) => "invalid_fee",
            AllocationError::InvalidDiscount(_) => "invalid_discount",
            AllocationError::AmountOverflow => "amount_overflow",
        }
    }
}

/// Why a piece of text could not be turned into an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    /// Blank input
    #[error("Input is empty")]
    Empty,

    /// Plain text without a single digit
    #[error("Input contains no digits")]
    NoDigits,

    /// A character outside `0-9 + - * / ( ) .` in an expression
    #[error("Unexpected character '{character}' at position {position}")]
    InvalidCharacter {
        /// The rejected character
        character: char,
        /// Character offset after normalization
        position: usize,
    },

    /// Opening and closing parenthesis counts differ
    #[error("Unbalanced parentheses: {open} opening, {close} closing")]
    UnbalancedParentheses {
        /// Number of `(`
        open: usize,
        /// Number of `)`
        close: usize,
    },

    /// Expression is longer than the configured limit
    #[error("Expression length {length} exceeds the limit of {limit} characters")]
    TooLong {
        /// Length after normalization
        length: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Tokens do not form a valid arithmetic expression
    #[error("Malformed expression: {0}")]
    Malformed(String),

    /// Evaluation produced infinity or NaN (e.g. division by zero)
    #[error("Expression does not evaluate to a finite number")]
    NonFinite,
}

impl AmountParseError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AmountParseError::Empty => "empty",
            AmountParseError::NoDigits => "no_digits",
            AmountParseError::InvalidCharacter { .. } => "invalid_character",
            AmountParseError::UnbalancedParentheses { .. } => "unbalanced_parentheses",
            AmountParseError::TooLong { .. } => "too_long",
            AmountParseError::Malformed(_) => "malformed",
            AmountParseError::NonFinite => "non_finite",
        }
    }
}

/// Failure of an order book row operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Removing the only remaining row
    #[error("At least one order must remain")]
    LastEntry,

    /// No row carries the given id
    #[error("Order {0} not found")]
    UnknownOrder(u64),

    /// A restored book holds no rows
    #[error("Order book must contain at least one order")]
    NoOrders,

    /// A restored book would hand out an id that is already taken
    #[error("Next order id {next_id} must exceed the highest existing id {max_id}")]
    StaleNextId {
        /// Id the book would assign next
        next_id: u64,
        /// Highest id among the restored rows
        max_id: u64,
    },
}

impl OrderBookError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            OrderBookError::LastEntry => "last_entry",
            OrderBookError::UnknownOrder(_) => "unknown_order",
            OrderBookError::NoOrders => "no_orders",
            OrderBookError::StaleNextId { .. } => "stale_next_id",
        }
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting holds a value outside its allowed range
    #[error("Invalid configuration setting '{setting}': {message}")]
    Invalid {
        /// Dotted path of the setting
        setting: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "io",
            ConfigError::Parse(_) => "parse",
            ConfigError::Invalid { .. } => "invalid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_error_messages() {
        let err = AllocationError::AllAmountsMustBePositive { index: 2, amount: 0.0 };
        assert_eq!(err.to_string(), "All order amounts must be positive (order 2 has 0)");
        assert_eq!(err.category(), "non_positive_amount");
        assert_eq!(AllocationError::EmptyOrderList.category(), "empty_order_list");
    }

    #[test]
    fn parse_error_messages() {
        let err = AmountParseError::UnbalancedParentheses { open: 1, close: 0 };
        assert_eq!(err.to_string(), "Unbalanced parentheses: 1 opening, 0 closing");
        assert_eq!(err.category(), "unbalanced_parentheses");

        let err = AmountParseError::InvalidCharacter { character: 'x', position: 3 };
        assert_eq!(err.to_string(), "Unexpected character 'x' at position 3");
    }

    #[test]
    fn order_book_error_messages() {
        assert_eq!(OrderBookError::LastEntry.to_string(), "At least one order must remain");
        assert_eq!(OrderBookError::UnknownOrder(7).to_string(), "Order 7 not found");
        assert_eq!(
            OrderBookError::StaleNextId { next_id: 5, max_id: 5 }.to_string(),
            "Next order id 5 must exceed the highest existing id 5"
        );
    }
}
