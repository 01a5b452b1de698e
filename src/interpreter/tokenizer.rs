use crate::{
    error::ParseError,
    interpreter::normalizer::is_minus_run,
};

/// Result type used by the tokenizer.
pub type ParseResult<T> = Result<T, ParseError>;

/// An operator of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`, or an even run of `-`.
    Add,
    /// `-`, or an odd run of `-`.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`
    Assign,
}

impl Operator {
    /// The symbol this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Assign => '=',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified token of a normalized expression.
///
/// Tokens only live for the duration of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal such as `42` or `-7`.
    Integer(i64),
    /// A reference to a variable such as `x`.
    Variable(String),
    /// One of `+ - * / =`.
    Operator(Operator),
}

/// Splits a normalized expression into classified tokens.
///
/// Tokens alternate between operands (even positions) and operators (odd
/// positions). Two shapes are special: a single operand, and the assignment
/// `name = value`, whose target is returned as a [`Token::Variable`] without
/// being looked up.
///
/// The expression is validated before anything is classified: runs of two or
/// more `*`/`/` characters, unbalanced parentheses and any `=` outside the
/// assignment shape are rejected.
///
/// # Errors
/// - [`ParseError::InvalidExpression`] for malformed structure.
/// - [`ParseError::InvalidIdentifier`] for operands that are neither literals
///   nor alphabetic names.
/// - [`ParseError::LiteralTooLarge`] for literals outside `i64`.
///
/// # Example
/// ```
/// use reckon::interpreter::tokenizer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("2 -- x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(2),
///                 Token::Operator(Operator::Add),
///                 Token::Variable("x".to_string())]);
///
/// assert!(tokenize("2 ** 3").is_err());
/// ```
pub fn tokenize(expression: &str) -> ParseResult<Vec<Token>> {
    validate(expression)?;

    let parts: Vec<&str> = expression.split(' ').collect();

    if let [operand] = parts.as_slice() {
        return Ok(vec![classify_operand(operand)?]);
    }

    if expression.contains('=') {
        let [target, "=", value] = parts.as_slice() else {
            return Err(ParseError::invalid_expression(format!(
                "'=' must be used as 'name = value', found '{expression}'"
            )));
        };
        if !is_variable_name(target) {
            return Err(ParseError::InvalidIdentifier { token: (*target).to_string() });
        }
        return Ok(vec![Token::Variable((*target).to_string()),
                       Token::Operator(Operator::Assign),
                       classify_operand(value)?]);
    }

    if parts.len() % 2 == 0 {
        return Err(ParseError::invalid_expression(format!(
            "operator '{}' has no right operand",
            parts[parts.len() - 1]
        )));
    }

    parts.iter()
         .enumerate()
         .map(|(i, part)| {
             if i % 2 == 0 {
                 classify_operand(part)
             } else {
                 classify_operator(part).map(Token::Operator)
             }
         })
         .collect()
}

fn validate(expression: &str) -> ParseResult<()> {
    if expression.is_empty() {
        return Err(ParseError::invalid_expression("empty expression"));
    }

    let is_mul_or_div = |b: &u8| matches!(b, b'*' | b'/');
    if expression.as_bytes()
                 .windows(2)
                 .any(|pair| is_mul_or_div(&pair[0]) && is_mul_or_div(&pair[1]))
    {
        return Err(ParseError::invalid_expression(format!(
            "repeated '*' or '/' in '{expression}'"
        )));
    }

    let opening = expression.matches('(').count();
    let closing = expression.matches(')').count();
    if opening != closing {
        return Err(ParseError::invalid_expression(format!(
            "{opening} opening but {closing} closing parentheses"
        )));
    }

    Ok(())
}

/// Classifies an operand token as an integer literal or a variable reference.
///
/// # Errors
/// Returns [`ParseError::InvalidIdentifier`] when the token matches neither
/// class, [`ParseError::LiteralTooLarge`] when a literal overflows `i64`, and
/// [`ParseError::InvalidExpression`] for a stray parenthesis.
pub fn classify_operand(token: &str) -> ParseResult<Token> {
    if token == "(" || token == ")" {
        return Err(ParseError::invalid_expression(format!("unmatched '{token}'")));
    }
    if is_integer_literal(token) {
        return token.parse()
                    .map(Token::Integer)
                    .map_err(|_| ParseError::LiteralTooLarge { literal: token.to_string() });
    }
    if is_variable_name(token) {
        return Ok(Token::Variable(token.to_string()));
    }
    Err(ParseError::InvalidIdentifier { token: token.to_string() })
}

/// Classifies an operator token.
///
/// A run of `-` resolves by parity: odd runs subtract, even runs add.
///
/// # Errors
/// Returns [`ParseError::InvalidExpression`] for anything that is not one of
/// `+`, `*`, `/` or a run of `-`. `=` is only valid in the assignment shape
/// and is rejected here.
pub fn classify_operator(token: &str) -> ParseResult<Operator> {
    if is_minus_run(token) {
        return Ok(if token.len() % 2 == 0 { Operator::Add } else { Operator::Sub });
    }
    match token {
        "+" => Ok(Operator::Add),
        "*" => Ok(Operator::Mul),
        "/" => Ok(Operator::Div),
        _ => Err(ParseError::invalid_expression(format!("'{token}' is not an operator"))),
    }
}

/// Returns `true` for an optional `-` followed by one or more ASCII digits.
#[must_use]
pub fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` for a non-empty run of ASCII letters.
#[must_use]
pub fn is_variable_name(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}
