/// The lexer module splits a raw line into lexemes.
///
/// It only distinguishes operator runs, parentheses and words; deciding
/// what a word means is left to later stages.
pub mod lexer;
/// The normalizer module rewrites raw input into canonical token text.
///
/// # Responsibilities
/// - Separates operators and parentheses from operands by single spaces.
/// - Folds sign runs into the operand that follows them.
/// - Leaves command lines untouched.
pub mod normalizer;
/// The tokenizer module splits normalized text and classifies its tokens.
///
/// # Responsibilities
/// - Rejects malformed operator runs and unbalanced parentheses.
/// - Classifies operands as integer literals or variable references.
/// - Resolves runs of minus signs by parity.
pub mod tokenizer;
/// The variable store of a session.
pub mod store;
/// The evaluator module resolves groups, reduces expressions and performs
/// assignments.
///
/// # Responsibilities
/// - Evaluates parenthesized groups innermost first.
/// - Reduces flat expressions by operator precedence.
/// - Stores assigned values.
pub mod evaluator;
/// Commands such as `/help` and `/exit`.
pub mod command;
/// The session ties the pipeline together.
///
/// It owns the variable store and the working set and exposes the entry
/// points that process a line of input.
pub mod session;
