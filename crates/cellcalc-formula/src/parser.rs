//! Formula parser
//!
//! A recursive descent parser for arithmetic formulas. It does not build a tree itself;
//! it reports what it recognises as post-order [`ParseEvent`]s, and [`parse_formula`]
//! feeds those to an [`AstBuilder`].

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use crate::builder::{AstBuilder, MAX_NESTING};
use crate::error::{FormulaError, FormulaResult};
use crate::events::ParseEvent;
use std::fmt;

/// Parse formula text (without the leading `=`) into an AST
///
/// # Example
/// ```rust
/// use cellcalc_formula::parse_formula;
///
/// let ast = parse_formula("1+2*3").unwrap();
/// assert_eq!(ast.to_debug_string(), "(+ 1 (* 2 3))");
/// assert!(parse_formula("1+").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<FormulaExpr> {
    AstBuilder::build(parse_events(formula)).map_err(|err| {
        log::debug!("failed to parse formula '{}': {}", formula, err);
        err
    })
}

/// Tokenize and parse `formula`, returning its post-order event stream
///
/// On malformed input the stream ends with a single [`ParseEvent::Error`].
pub fn parse_events(formula: &str) -> Vec<ParseEvent<'_>> {
    let mut parser = FormulaParser::new(formula);
    if let Err(err) = parser.parse_main() {
        parser.events.push(ParseEvent::Error(err));
    }
    parser.events
}

/// Token types
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    /// Raw numeric literal text
    Number(&'a str),

    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,

    /// A character no token starts with
    Invalid(char),

    Eof,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "'{}'", text),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Invalid(c) => write!(f, "'{}'", c),
            Token::Eof => write!(f, "<EOF>"),
        }
    }
}

/// Formula parser
struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    current_token: Token<'a>,
    depth: usize,
    events: Vec<ParseEvent<'a>>,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> Self {
        let mut parser = Self {
            input,
            pos: 0,
            current_token: Token::Eof,
            depth: 0,
            events: Vec::new(),
        };
        parser.advance_token();
        parser
    }

    // === Token scanning ===

    fn advance_token(&mut self) {
        self.current_token = self.scan_token();
    }

    fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Token::Eof,
        };

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_digit() || c == '.' => return self.scan_number(),
            c => Token::Invalid(c),
        };

        self.advance();
        token
    }

    /// Scan the longest run that could belong to a number.
    ///
    /// Whether the text really is a number is decided by the builder, so `1.2.3`
    /// comes out as one token and is rejected there.
    fn scan_number(&mut self) -> Token<'a> {
        let start = self.pos;

        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_digit() || c == '.')
        {
            self.advance();
        }

        // Exponent part
        if self.peek_char().map_or(false, |c| c == 'e' || c == 'E') {
            self.advance();
            if self.peek_char().map_or(false, |c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let input = self.input;
        Token::Number(&input[start..self.pos])
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn consume(&mut self) {
        self.advance_token();
    }

    fn unexpected(&self) -> FormulaError {
        match self.current_token {
            Token::Invalid(c) => FormulaError::Lex(format!("token recognition error at: '{}'", c)),
            Token::Eof => FormulaError::Parse("unexpected end of formula".into()),
            token => FormulaError::Parse(format!("unexpected token {}", token)),
        }
    }

    fn enter(&mut self) -> FormulaResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(FormulaError::Parse(format!(
                "formula nested deeper than {} levels",
                MAX_NESTING
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: +, -
    // 4. Primary: numbers, parentheses

    fn parse_main(&mut self) -> FormulaResult<()> {
        self.parse_expression()?;

        match self.current_token {
            Token::Eof => Ok(()),
            Token::Invalid(_) => Err(self.unexpected()),
            token => Err(FormulaError::Parse(format!(
                "extraneous input {} after expression",
                token
            ))),
        }
    }

    fn parse_expression(&mut self) -> FormulaResult<()> {
        self.parse_multiplicative()?;

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume();
            self.parse_multiplicative()?;
            self.events.push(ParseEvent::Binary(op));
        }

        Ok(())
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<()> {
        self.parse_unary()?;

        loop {
            let op = match self.current_token {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume();
            self.parse_unary()?;
            self.events.push(ParseEvent::Binary(op));
        }

        Ok(())
    }

    fn parse_unary(&mut self) -> FormulaResult<()> {
        let op = match self.current_token {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Minus,
            _ => return self.parse_primary(),
        };

        self.consume();
        self.enter()?;
        self.parse_unary()?;
        self.leave();
        self.events.push(ParseEvent::Unary(op));
        Ok(())
    }

    fn parse_primary(&mut self) -> FormulaResult<()> {
        match self.current_token {
            Token::Number(text) => {
                self.consume();
                self.events.push(ParseEvent::Literal(text));
                Ok(())
            }

            Token::LeftParen => {
                self.consume();
                self.enter()?;
                self.parse_expression()?;
                self.leave();

                if self.current_token == Token::RightParen {
                    self.consume();
                    Ok(())
                } else {
                    Err(self.unexpected())
                }
            }

            _ => Err(self.unexpected()),
        }
    }
}
