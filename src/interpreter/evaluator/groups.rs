use std::ops::Range;

use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        normalizer::normalize,
        session::{Session, SessionResult},
    },
};

/// Finds the leftmost innermost parenthesized group of `text`.
///
/// A group is a `(` followed by at least one character that is not a
/// parenthesis and then a `)`. The returned range covers both parentheses.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::groups::find_innermost_group;
///
/// let text = "( ( 1 + 2 ) * ( 3 + 4 ) )";
/// assert_eq!(find_innermost_group(text), Some(2..11));
/// assert_eq!(find_innermost_group("1 + 2"), None);
/// assert_eq!(find_innermost_group("()"), None);
/// ```
#[must_use]
pub fn find_innermost_group(text: &str) -> Option<Range<usize>> {
    let mut open = None;
    for (index, c) in text.char_indices() {
        match c {
            '(' => open = Some(index),
            ')' => {
                if let Some(start) = open.take()
                   && index > start + 1
                {
                    return Some(start..index + 1);
                }
            },
            _ => {},
        }
    }
    None
}

impl Session {
    /// Replaces every parenthesized group of a normalized expression by its
    /// value, innermost first, and returns the normalized flat remainder.
    ///
    /// Each group is evaluated as an independent expression that must compute
    /// a value: a group holding only whitespace, a single operand or an
    /// assignment is invalid. A group must also stand where an operand can:
    /// after an operator, `(` or the start of the line, and before an
    /// operator, `)` or the end, so `10 (0 - 3)` is rejected rather than read
    /// as `10 - 3` once the value is substituted. Unbalanced parentheses are
    /// left in place for the tokenizer to reject.
    pub(crate) fn resolve_groups(&mut self, expression: &str) -> SessionResult<String> {
        let mut text = expression.to_string();

        while let Some(range) = find_innermost_group(&text) {
            let before = text[..range.start].split_whitespace().next_back();
            let after = text[range.end..].split_whitespace().next();
            if !before.is_none_or(|token| token == "(" || is_operator_run(token))
               || !after.is_none_or(|token| token == ")" || is_operator_run(token))
            {
                return Err(ParseError::invalid_expression(format!(
                    "'{}' is not separated from its neighbours by an operator",
                    &text[range.clone()]
                )).into());
            }

            let interior = normalize(&text[range.start + 1..range.end - 1]);
            if interior.is_empty() {
                return Err(ParseError::invalid_expression("empty parentheses").into());
            }

            let value = self.calculate(&interior, true)?.ok_or_else(|| {
                                                          ParseError::invalid_expression("group produced no value")
                                                      })?;
            debug!("({interior}) => {value}");
            text.replace_range(range, &value.to_string());
        }

        Ok(normalize(&text))
    }
}

fn is_operator_run(token: &str) -> bool {
    token.bytes().all(|b| matches!(b, b'+' | b'-' | b'*' | b'/' | b'='))
}
