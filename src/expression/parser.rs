use std::iter::Peekable;
use std::str::CharIndices;

use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// # Errors
///
/// Returns an error when the input is not a well-formed expression over
/// integer literals, `+ - * /` and balanced parentheses.
pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
    debug!("Parsing expression: {}", input);

    let mut parser = Parser {
        chars: input.char_indices().peekable(),
        input,
    };
    let expr = parser.parse_expr()?;

    parser.skip_whitespace();
    if let Some(&(pos, _)) = parser.chars.peek() {
        return Err(ExpressionError::TrailingInput { pos });
    }
    Ok(expr)
}

/// Recursive descent, one level per precedence tier:
///
/// ```text
/// expr   := term   (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := '-'? digits | '(' expr ')'
/// ```
struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
    input: &'a str,
}

impl Parser<'_> {
    fn parse_expr(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.next_operator(1) {
            let right = self.parse_term()?;
            left = op.apply(left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.next_operator(2) {
            let right = self.parse_factor()?;
            left = op.apply(left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, ExpressionError> {
        self.skip_whitespace();
        match self.chars.peek().copied() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some((_, '(')) => {
                self.chars.next();
                let inner = self.parse_expr()?;
                self.skip_whitespace();
                match self.chars.next() {
                    Some((_, ')')) => Ok(inner),
                    Some((pos, ch)) => Err(ExpressionError::UnexpectedChar { ch, pos }),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some((start, ch)) if ch == '-' || ch.is_ascii_digit() => self.parse_number(start),
            Some((pos, ch)) => Err(ExpressionError::UnexpectedChar { ch, pos }),
        }
    }

    fn parse_number(&mut self, start: usize) -> Result<Expression, ExpressionError> {
        let mut end = start;
        if let Some((pos, '-')) = self.chars.peek().copied() {
            self.chars.next();
            end = pos + 1;
        }

        while let Some(&(pos, ch)) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.chars.next();
            end = pos + 1;
        }

        let literal = self.input.get(start..end).unwrap_or_default();
        if !literal.bytes().any(|b| b.is_ascii_digit()) {
            return match self.chars.peek().copied() {
                Some((pos, ch)) => Err(ExpressionError::UnexpectedChar { ch, pos }),
                None => Err(ExpressionError::UnexpectedEnd),
            };
        }

        let value = literal
            .parse::<i64>()
            .map_err(|_| ExpressionError::InvalidNumber(literal.to_string()))?;
        Ok(Expression::Number(value as f64))
    }

    /// Consume the next operator if it sits on the given precedence tier.
    fn next_operator(&mut self, precedence: u8) -> Option<Operator> {
        self.skip_whitespace();
        let (_, ch) = self.chars.peek().copied()?;
        let op = Operator::from_symbol(ch).filter(|op| op.precedence() == precedence)?;
        self.chars.next();
        Some(op)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}
    }
}
