use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::WorkingSet, tokenizer::Operator},
};

/// Result type used by the evaluator.
///
/// All reduction functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Operator tiers in the order they are reduced.
pub const TIERS: [&[Operator]; 2] = [&[Operator::Mul, Operator::Div], &[Operator::Add, Operator::Sub]];

/// Applies an arithmetic operator to two integers.
///
/// Division truncates toward zero. All operations are checked, so a result
/// that does not fit into an `i64` is an error instead of a wrapped value.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if `op` is `Div` and `right` is zero.
/// - [`RuntimeError::Overflow`] if the result is out of range.
///
/// # Example
/// ```
/// use reckon::{
///     error::RuntimeError,
///     interpreter::{evaluator::binary::apply, tokenizer::Operator},
/// };
///
/// assert_eq!(apply(Operator::Div, -7, 2), Ok(-3));
/// assert_eq!(apply(Operator::Div, 1, 0), Err(RuntimeError::DivisionByZero));
/// assert_eq!(apply(Operator::Add, i64::MAX, 1), Err(RuntimeError::Overflow));
/// ```
pub fn apply(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
        Operator::Assign => unreachable!("assignment is never reduced"),
    };
    result.ok_or(RuntimeError::Overflow)
}

impl WorkingSet {
    /// Reduces the loaded operands and operators to a single value.
    ///
    /// Each tier is processed in turn. Within a tier the leftmost operator
    /// belonging to it is applied first, its two operands are replaced by the
    /// result and the scan starts over, so `20 / 4 / 5` is `(20 / 4) / 5`.
    ///
    /// The working set must hold only arithmetic operators.
    ///
    /// # Errors
    /// Propagates the errors of [`apply`].
    pub fn reduce(&mut self) -> EvalResult<i64> {
        for tier in TIERS {
            while let Some(index) = self.operators.iter().position(|op| tier.contains(op)) {
                let op = self.operators.remove(index);
                let right = self.operands.remove(index + 1);
                let left = self.operands[index];
                let result = apply(op, left, right)?;
                trace!("{left} {op} {right} = {result}");
                self.operands[index] = result;
            }
        }

        debug_assert!(self.operators.is_empty() && self.operands.len() == 1);
        Ok(self.operands[0])
    }
}
