/// The working set of an evaluation pass and the top-level evaluation logic.
///
/// Holds the operand and operator sequences of one expression and decides
/// whether a loaded expression is a bare value, an assignment or an
/// arithmetic expression.
pub mod core;

/// Binary operator evaluation.
///
/// Applies one arithmetic operator to two integers and reduces a whole
/// working set tier by tier.
pub mod binary;

/// Parenthesized group resolution.
///
/// Evaluates innermost groups first and substitutes their values back into
/// the expression text.
pub mod groups;

/// Assignment evaluation.
///
/// Stores the value of a `name = value` expression in the session's
/// variable store.
pub mod assignment;
