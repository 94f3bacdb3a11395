use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::parser::parse;
use crate::utils::Tolerance;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// Numeric outcome of evaluating one expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalResult {
    /// The real-valued result.
    pub float: f64,
    /// `float` rounded, present only when it is integral within the tolerance.
    pub total: Option<i64>,
}

impl EvalResult {
    pub fn new(float: f64, tolerance: Tolerance) -> Self {
        Self {
            float,
            total: tolerance.nearest_integer(float),
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when a divisor evaluates to zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left - right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left * right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    debug!("Division by zero attempted: {} / {}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Parse and evaluate a rendered expression in one step.
///
/// # Errors
///
/// Returns an error if the text does not parse or a division by zero occurs.
pub fn evaluate_str(input: &str, tolerance: Tolerance) -> Result<EvalResult, ExpressionError> {
    let expr = parse(input)?;
    debug!("Evaluating expression: {}", expr);

    let result = expr.evaluate();
    match &result {
        Ok(value) => debug!("Expression {} evaluated to: {}", input, value),
        Err(e) => debug!("Expression {} evaluation failed: {}", input, e),
    }

    Ok(EvalResult::new(result?, tolerance))
}
