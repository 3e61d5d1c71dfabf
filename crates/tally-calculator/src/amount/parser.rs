//! Parser for amount expressions
//!
//! Recursive descent over the grammar
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```

use super::ast::{BinaryOperator, Expression, UnaryOperator};
use super::lexer::{Lexer, Token};
use crate::error::AmountParseError;

/// Maximum nesting of parentheses and unary signs
const MAX_NESTING_DEPTH: usize = 128;

/// Parser for amount expressions
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, AmountParseError> {
        let current_token = lexer.next_token()?;
        Ok(Self { lexer, current_token, depth: 0 })
    }

    fn advance(&mut self) -> Result<(), AmountParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), AmountParseError> {
        if self.current_token == expected {
            self.advance()
        } else {
            Err(AmountParseError::Malformed(format!(
                "expected {}, found {}",
                expected, self.current_token
            )))
        }
    }

    fn enter(&mut self) -> Result<(), AmountParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(AmountParseError::Malformed(format!(
                "nesting deeper than {MAX_NESTING_DEPTH} levels"
            )));
        }
        Ok(())
    }

    pub fn parse_expression(&mut self) -> Result<Expression, AmountParseError> {
        self.parse_additive_expression()
    }

    fn parse_additive_expression(&mut self) -> Result<Expression, AmountParseError> {
        let mut left = self.parse_multiplicative_expression()?;

        while matches!(self.current_token, Token::Plus | Token::Minus) {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                _ => BinaryOperator::Subtract,
            };
            self.advance()?;
            let right = self.parse_multiplicative_expression()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression, AmountParseError> {
        let mut left = self.parse_unary_expression()?;

        while matches!(self.current_token, Token::Star | Token::Slash) {
            let op = match self.current_token {
                Token::Star => BinaryOperator::Multiply,
                _ => BinaryOperator::Divide,
            };
            self.advance()?;
            let right = self.parse_unary_expression()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> Result<Expression, AmountParseError> {
        let op = match self.current_token {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_primary_expression(),
        };

        self.enter()?;
        self.advance()?;
        let operand = self.parse_unary_expression()?;
        self.depth -= 1;
        Ok(Expression::unary(op, operand))
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, AmountParseError> {
        match self.current_token {
            Token::Number(value) => {
                self.advance()?;
                Ok(Expression::number(value))
            }
            Token::LeftParen => {
                self.enter()?;
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(Token::RightParen)?;
                self.depth -= 1;
                Ok(expr)
            }
            ref other => Err(AmountParseError::Malformed(format!("unexpected {other}"))),
        }
    }
}

/// Parse a normalized expression string into an AST
pub fn parse_expression(input: &str) -> Result<Expression, AmountParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    let expr = parser.parse_expression()?;

    // Ensure we've consumed all tokens
    if parser.current_token != Token::Eof {
        return Err(AmountParseError::Malformed(format!(
            "unexpected {} after expression",
            parser.current_token
        )));
    }

    Ok(expr)
}
