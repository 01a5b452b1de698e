use crate::interpreter::lexer::{Lexeme, lex};

/// Rewrites a raw input line into its canonical, single-space-delimited form.
///
/// Every operator run and every parenthesis ends up as its own token, and
/// whitespace is collapsed. Lines starting with `/` are commands and are
/// returned trimmed but otherwise untouched.
///
/// Runs of minus signs are handled with a parity rule:
/// - between two operands the whole run stays one operator token (`5 -- 3`)
///   and the tokenizer later decides whether it subtracts or adds;
/// - in prefix position (start of the line, after `(`, or trailing another
///   operator as in `*--`) the run is a sign and is folded into the operand
///   that follows it, an odd run producing `-N` and an even run producing `N`.
///
/// A sign run that is not followed by an operand (`-(1 + 2)`) is kept as its
/// own token; once the group has been substituted the line is normalized
/// again and the sign folds into the substituted value.
///
/// Normalizing an already normalized line returns it unchanged.
///
/// # Example
/// ```
/// use reckon::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("  2+3 *(4-x) "), "2 + 3 * ( 4 - x )");
/// assert_eq!(normalize("5 - -3"), "5 -- 3");
/// assert_eq!(normalize("2*--3"), "2 * 3");
/// assert_eq!(normalize("a=-7"), "a = -7");
/// assert_eq!(normalize("/help "), "/help");
/// ```
#[must_use]
pub fn normalize(line: &str) -> String {
    let line = line.trim();
    if line.starts_with('/') {
        return line.to_string();
    }

    let mut tokens: Vec<String> = Vec::new();
    let mut sign: Option<String> = None;
    let mut expect_operand = true;

    for lexeme in lex(line) {
        match lexeme {
            Lexeme::Word(word) => {
                tokens.push(apply_sign(sign.take().as_deref(), word));
                expect_operand = false;
            },
            Lexeme::LParen => {
                tokens.extend(sign.take());
                tokens.push("(".to_string());
                expect_operand = true;
            },
            Lexeme::RParen => {
                tokens.extend(sign.take());
                tokens.push(")".to_string());
                expect_operand = false;
            },
            Lexeme::Operators(run) => {
                if expect_operand {
                    if is_minus_run(&run) {
                        sign = Some(run);
                    } else {
                        tokens.push(run);
                    }
                    continue;
                }
                let (operator, tail) = split_operator_run(&run);
                tokens.push(operator.to_string());
                if !tail.is_empty() {
                    sign = Some(tail.to_string());
                }
                expect_operand = true;
            },
            Lexeme::Ignored => {},
        }
    }
    tokens.extend(sign);

    tokens.join(" ")
}

/// Returns `true` if `run` is a non-empty run made only of `-` characters.
#[must_use]
pub fn is_minus_run(run: &str) -> bool {
    !run.is_empty() && run.bytes().all(|b| b == b'-')
}

fn apply_sign(sign: Option<&str>, word: String) -> String {
    match sign {
        Some(run) if run.len() % 2 == 1 => format!("-{word}"),
        _ => word,
    }
}

/// Splits an infix operator run into the operator and a trailing sign run.
///
/// `--` stays whole, `*--` becomes `*` and `--`. Runs that cannot be split
/// this way (`**`, `-+`) are returned whole so the tokenizer can reject them.
fn split_operator_run(run: &str) -> (&str, &str) {
    if is_minus_run(run) {
        return (run, "");
    }
    let (head, tail) = run.split_at(1);
    if tail.is_empty() || is_minus_run(tail) { (head, tail) } else { (run, "") }
}
