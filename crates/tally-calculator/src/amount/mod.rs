//! Free-text amount normalizer
//!
//! Turns whatever the user typed into an amount field into a number. Two
//! input modes share one field and are told apart purely by syntax:
//!
//! - Plain: grouped currency text such as `1.000.000` or `25,000 đ`. Every
//!   non-digit is dropped and the digits are read as an integer.
//! - Expression: any text containing an operator glyph (`+ - * / ( ) × ÷`)
//!   is evaluated as arithmetic, e.g. `500*2` or `(120+80)÷4`.
//!
//! [`AmountParser::parse`] never fails and collapses every problem to `0`.
//! [`AmountParser::try_parse`] reports why the text was rejected.

pub mod ast;
mod lexer;
mod parser;

pub use parser::parse_expression;

use crate::config::ParserConfig;
use crate::error::AmountParseError;
use tracing::debug;

/// Characters that switch the parser into expression mode
const OPERATOR_GLYPHS: [char; 8] = ['+', '-', '*', '/', '(', ')', '×', '÷'];

/// Which interpretation a piece of text receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Grouped-digit literal
    Plain,
    /// Arithmetic expression
    Expression,
}

impl InputMode {
    /// Classify raw input by the presence of an operator glyph
    pub fn detect(raw: &str) -> Self {
        if raw.contains(OPERATOR_GLYPHS) { InputMode::Expression } else { InputMode::Plain }
    }
}

/// Converts raw text fields into amounts.
#[derive(Debug, Clone)]
pub struct AmountParser {
    max_expression_length: usize,
}

impl Default for AmountParser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl AmountParser {
    /// Create a parser with the given limits
    pub fn new(config: &ParserConfig) -> Self {
        Self { max_expression_length: config.max_expression_length }
    }

    /// Parse `raw`, returning `0` for anything that is not a valid amount.
    pub fn parse(&self, raw: &str) -> f64 {
        self.try_parse(raw).unwrap_or_else(|err| {
            debug!(input = raw, reason = err.category(), "amount input coerced to zero");
            0.0
        })
    }

    /// Parse `raw`, reporting why it could not be read.
    pub fn try_parse(&self, raw: &str) -> Result<f64, AmountParseError> {
        if raw.trim().is_empty() {
            return Err(AmountParseError::Empty);
        }

        match InputMode::detect(raw) {
            InputMode::Plain => parse_plain(raw),
            InputMode::Expression => self.parse_expression_input(raw),
        }
    }

    fn parse_expression_input(&self, raw: &str) -> Result<f64, AmountParseError> {
        let normalized = normalize_expression(raw);

        let length = normalized.chars().count();
        if length > self.max_expression_length {
            return Err(AmountParseError::TooLong { length, limit: self.max_expression_length });
        }

        validate_expression(&normalized)?;

        let value = parse_expression(&normalized)?.evaluate();
        if !value.is_finite() {
            return Err(AmountParseError::NonFinite);
        }

        debug!(expression = %normalized, value, "evaluated amount expression");
        Ok(value)
    }
}

/// Read grouped currency text by keeping only its digits.
fn parse_plain(raw: &str) -> Result<f64, AmountParseError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(AmountParseError::NoDigits);
    }

    // Any run of ASCII digits parses; only absurd lengths overflow to infinity
    let value = digits.parse::<f64>().map_err(|_| AmountParseError::NoDigits)?;
    if value.is_finite() { Ok(value) } else { Err(AmountParseError::NonFinite) }
}

/// Replace display glyphs by ASCII operators.
///
/// Whitespace is left in place and rejected by [`validate_expression`].
fn normalize_expression(raw: &str) -> String {
    raw.chars()
        .map(|ch| match ch {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

/// Character-set and parenthesis-balance checks run before tokenizing.
fn validate_expression(expression: &str) -> Result<(), AmountParseError> {
    if let Some((position, character)) = expression
        .chars()
        .enumerate()
        .find(|(_, ch)| !matches!(ch, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.'))
    {
        return Err(AmountParseError::InvalidCharacter { character, position });
    }

    let open = expression.matches('(').count();
    let close = expression.matches(')').count();
    if open != close {
        return Err(AmountParseError::UnbalancedParentheses { open, close });
    }

    Ok(())
}
