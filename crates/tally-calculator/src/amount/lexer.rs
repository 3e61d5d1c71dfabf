//! Lexer for arithmetic amount expressions
//!
//! Input reaching the lexer has already been normalized: display glyphs are
//! replaced by their ASCII operators and only `0-9 + - * / ( ) .` remain.

use crate::error::AmountParseError;
use std::fmt;

/// Token types recognized by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Number(f64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Delimiters
    LeftParen,
    RightParen,

    // Special
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// Lexer for tokenizing amount expressions
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self { input: chars, position: 0, current_char }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn read_number(&mut self) -> Result<Token, AmountParseError> {
        let mut number = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // A lone "." has no digits to parse
        number
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| AmountParseError::Malformed(format!("invalid number '{number}'")))
    }

    pub fn next_token(&mut self) -> Result<Token, AmountParseError> {
        match self.current_char {
            None => Ok(Token::Eof),
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(),
            Some(ch) => {
                let token = match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '(' => Token::LeftParen,
                    ')' => Token::RightParen,
                    _ => {
                        return Err(AmountParseError::InvalidCharacter {
                            character: ch,
                            position: self.position,
                        });
                    }
                };
                self.advance();
                Ok(token)
            }
        }
    }
}
