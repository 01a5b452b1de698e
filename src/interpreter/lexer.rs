use logos::Logos;

/// Represents a lexeme of a raw input line.
///
/// The lexer only separates the line into the four character classes the
/// normalizer cares about. It does not decide whether a word is a valid
/// operand or whether an operator run is well formed; that is left to the
/// tokenizer so that malformed input still produces a precise error.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Lexeme {
    /// A run of operator characters, such as `+`, `--` or `*-`.
    #[regex(r"[+\-*/=]+", |lex| lex.slice().to_string())]
    Operators(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other run of non-blank characters: numbers, names, and garbage
    /// like `x1` or `3.5` that the tokenizer will reject.
    #[regex(r"[^ \t\r\n\f+\-*/=()]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Word(String),
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits a raw line into lexemes, merging operator runs that are only
/// separated by whitespace.
///
/// `5 - -3` therefore yields the single run `--` between `5` and `3`, which is
/// what lets the parity rule see a maximal run of minus signs.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Lexeme, lex};
///
/// let lexemes = lex("x= 2 - -y");
/// assert_eq!(lexemes,
///            vec![Lexeme::Word("x".into()),
///                 Lexeme::Operators("=".into()),
///                 Lexeme::Word("2".into()),
///                 Lexeme::Operators("--".into()),
///                 Lexeme::Word("y".into())]);
/// ```
#[must_use]
pub fn lex(line: &str) -> Vec<Lexeme> {
    let mut lexemes: Vec<Lexeme> = Vec::new();
    let mut lexer = Lexeme::lexer(line);

    while let Some(result) = lexer.next() {
        // Every character belongs to one of the classes above.
        let lexeme = result.unwrap_or_else(|()| Lexeme::Word(lexer.slice().to_string()));

        if let Lexeme::Operators(run) = &lexeme
           && let Some(Lexeme::Operators(previous)) = lexemes.last_mut()
        {
            previous.push_str(run);
            continue;
        }
        lexemes.push(lexeme);
    }

    lexemes
}
