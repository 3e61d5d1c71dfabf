//! The order cost allocation engine for Tally.
//!
//! This crate turns user-typed amount text into numbers, proposes
//! magnitude-scaled entry suggestions, and splits a shared fee and discount
//! across a list of orders.
//!
//! ```
//! use tally_calculator::OrderCalculator;
//! use tally_types::AllocationRequest;
//!
//! let calculator = OrderCalculator::new();
//! let amounts: Vec<f64> = ["100", "2*100", "1.5×200"]
//!     .iter()
//!     .map(|raw| calculator.parse(raw))
//!     .collect();
//!
//! let request = AllocationRequest::from_amounts(&amounts, 60.0, 30.0);
//! let result = calculator.allocate(&request).unwrap();
//! assert_eq!(result.total_final, 630.0);
//! ```

pub mod allocation;
pub mod amount;
pub mod config;
pub mod display;
pub mod error;
pub mod order_book;
pub mod suggestion;

pub use allocation::{allocate, round2};
pub use amount::{AmountParser, InputMode};
pub use config::{CalculatorConfig, DisplayConfig, ParserConfig};
pub use display::format_amount;
pub use error::{AllocationError, AmountParseError, ConfigError, OrderBookError};
pub use order_book::OrderBook;
pub use suggestion::suggest;

use tally_types::{AllocationRequest, CalculationResult};
use tracing::{info, instrument};

/// Entry point bundling the parser, suggestion generator, allocation engine
/// and display settings behind one configured value.
///
/// Stateless apart from its configuration; share it freely across threads.
#[derive(Debug, Clone)]
pub struct OrderCalculator {
    parser: AmountParser,
    config: CalculatorConfig,
}

impl Default for OrderCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderCalculator {
    /// Create a calculator with default settings
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator from explicit settings
    #[instrument(skip(config))]
    pub fn with_config(config: CalculatorConfig) -> Self {
        info!(
            max_expression_length = config.parser.max_expression_length,
            "Creating order calculator"
        );
        Self { parser: AmountParser::new(&config.parser), config }
    }

    /// Create a calculator from `TALLY_CONFIG_PATH` and `TALLY_*` overrides
    pub fn from_environment() -> Self {
        Self::with_config(CalculatorConfig::load())
    }

    /// Active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The configured amount parser
    pub fn parser(&self) -> &AmountParser {
        &self.parser
    }

    /// Parse an amount field, coercing anything unreadable to `0`
    #[instrument(level = "debug", skip(self))]
    pub fn parse(&self, raw: &str) -> f64 {
        self.parser.parse(raw)
    }

    /// Parse an amount field, reporting why it could not be read
    #[instrument(level = "debug", skip(self))]
    pub fn try_parse(&self, raw: &str) -> Result<f64, AmountParseError> {
        self.parser.try_parse(raw)
    }

    /// Up to three magnitude-scaled alternatives for `amount`
    pub fn suggest(&self, amount: f64) -> Vec<f64> {
        suggest(amount)
    }

    /// Split the request's fee and discount across its orders
    #[instrument(skip(self, request), fields(order_count = request.order_count()))]
    pub fn allocate(
        &self,
        request: &AllocationRequest,
    ) -> Result<CalculationResult, AllocationError> {
        allocate(request)
    }

    /// Render an amount with the configured separators
    pub fn format_amount(&self, value: f64) -> String {
        format_amount(value, &self.config.display)
    }
}
