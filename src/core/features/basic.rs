//! Basic calculator: a hand-written arithmetic expression evaluator.
//!
//! The grammar is deliberately tiny - numbers, `+ - * /`, parentheses and
//! whitespace. Input is evaluated by a recursive-descent parser over a
//! token stream, never by a general evaluation facility, so no payload
//! can execute anything beyond arithmetic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::{AppError, AppResult};

// Mirrors the charset the HTTP contract allows for expressions.
static EXPRESSION_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9+\-*/.() ]+$").expect("Failed to compile expression charset pattern")
});

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
}

fn tokenize(expression: &str) -> AppResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expression.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal.parse::<f64>().map_err(|_| {
                    AppError::Expression(format!("'{}' is not a valid number", literal))
                })?;
                tokens.push(Token::Number(value));
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::OpenParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::CloseParen);
            }
            other => {
                return Err(AppError::Expression(format!(
                    "unexpected character '{}'",
                    other
                )));
            }
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser with the usual precedence:
/// expression := term (('+'|'-') term)*
/// term       := factor (('*'|'/') factor)*
/// factor     := number | '(' expression ')' | ('+'|'-') factor
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at_end(&self) -> bool {
        self.pos == self.tokens.len()
    }

    fn expression(&mut self) -> AppResult<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> AppResult<f64> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value *= self.factor()?;
                }
                Some(Token::Slash) => {
                    // Division by zero is left to IEEE semantics; callers
                    // decide whether a non-finite result is acceptable.
                    self.advance();
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> AppResult<f64> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::OpenParen) => {
                let value = self.expression()?;
                match self.advance() {
                    Some(Token::CloseParen) => Ok(value),
                    _ => Err(AppError::Expression("unbalanced parentheses".to_string())),
                }
            }
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::Plus) => self.factor(),
            Some(_) => Err(AppError::Expression(
                "operator where a value was expected".to_string(),
            )),
            None => Err(AppError::Expression(
                "unexpected end of expression".to_string(),
            )),
        }
    }
}

/// Validate and evaluate an arithmetic expression string.
pub fn evaluate_expression(expression: &str) -> AppResult<f64> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(AppError::Expression("empty expression".to_string()));
    }
    if !EXPRESSION_CHARSET.is_match(trimmed) {
        return Err(AppError::Expression(
            "expression may only contain digits, + - * / . ( ) and spaces".to_string(),
        ));
    }

    let tokens = tokenize(trimmed)?;
    let mut parser = Parser::new(tokens);
    let value = parser.expression()?;
    if !parser.at_end() {
        return Err(AppError::Expression(
            "trailing input after expression".to_string(),
        ));
    }
    Ok(value)
}
