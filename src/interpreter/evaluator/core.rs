use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        session::{Session, SessionResult},
        store::VariableStore,
        tokenizer::{Operator, Token, tokenize},
    },
};

/// The transient state of one evaluation pass.
///
/// Operands are already resolved to integers. Whenever a working set is
/// loaded, `operands.len() == operators.len() + 1` holds, and the operators
/// are either empty, a single [`Operator::Assign`], or purely arithmetic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    /// The variable an assignment will write to.
    pub target:    Option<String>,
    /// Operand values in source order.
    pub operands:  Vec<i64>,
    /// Operators in source order; `operators[i]` sits between `operands[i]`
    /// and `operands[i + 1]`.
    pub operators: Vec<Operator>,
}

impl WorkingSet {
    /// Creates an empty working set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target.is_none() && self.operands.is_empty() && self.operators.is_empty()
    }

    /// Clears every sequence and the assignment target.
    pub fn reset(&mut self) {
        self.target = None;
        self.operands.clear();
        self.operators.clear();
    }

    /// Loads classified tokens into an empty working set, resolving variable
    /// references through `store`.
    ///
    /// The target of an assignment is recorded as such and is not looked up.
    ///
    /// # Errors
    /// Returns [`crate::error::RuntimeError::UnknownVariable`] for a variable
    /// that has not been assigned, or [`ParseError::InvalidExpression`] if the
    /// tokens do not alternate between operands and operators.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     evaluator::core::WorkingSet,
    ///     store::VariableStore,
    ///     tokenizer::{Operator, tokenize},
    /// };
    ///
    /// let mut store = VariableStore::new();
    /// store.set("x", 4);
    ///
    /// let mut working = WorkingSet::new();
    /// working.load(tokenize("1 + x").unwrap(), &store).unwrap();
    /// assert_eq!(working.operands, vec![1, 4]);
    /// assert_eq!(working.operators, vec![Operator::Add]);
    /// ```
    pub fn load(&mut self, tokens: Vec<Token>, store: &VariableStore) -> SessionResult<()> {
        if let [Token::Variable(name), Token::Operator(Operator::Assign), value] = tokens.as_slice() {
            let value = match value {
                Token::Integer(value) => *value,
                Token::Variable(source) => store.get(source)?,
                Token::Operator(op) => {
                    return Err(ParseError::invalid_expression(format!("cannot assign '{op}'")).into());
                },
            };
            self.target = Some(name.clone());
            self.operands.push(value);
            self.operators.push(Operator::Assign);
            return Ok(());
        }

        for (i, token) in tokens.into_iter().enumerate() {
            match (token, i % 2 == 0) {
                (Token::Integer(value), true) => self.operands.push(value),
                (Token::Variable(name), true) => self.operands.push(store.get(&name)?),
                (Token::Operator(Operator::Assign), false) => {
                    return Err(ParseError::invalid_expression("'=' outside of an assignment").into());
                },
                (Token::Operator(op), false) => self.operators.push(op),
                (token, _) => {
                    return Err(ParseError::invalid_expression(format!("unexpected token {token:?}")).into());
                },
            }
        }

        if self.operands.len() != self.operators.len() + 1 {
            return Err(ParseError::invalid_expression("operators and operands do not alternate").into());
        }
        Ok(())
    }
}

impl Session {
    /// Evaluates a flat, normalized expression.
    ///
    /// `nested` marks the interior of a parenthesized group: there, a bare
    /// operand and an assignment are both invalid because a group must
    /// compute a value.
    ///
    /// Returns `Some(value)` for an expression and `None` for an assignment.
    /// The working set is reset before returning, on success and on error.
    pub(crate) fn calculate(&mut self, expression: &str, nested: bool) -> SessionResult<Option<i64>> {
        self.working.reset();
        let result = self.calculate_loaded(expression, nested);
        self.working.reset();
        result
    }

    fn calculate_loaded(&mut self, expression: &str, nested: bool) -> SessionResult<Option<i64>> {
        let tokens = tokenize(expression)?;
        self.working.load(tokens, &self.store)?;

        match self.working.operators.first().copied() {
            None if nested => Err(ParseError::invalid_expression(format!(
                "group '({expression})' contains no operator"
            )).into()),
            None => Ok(self.working.operands.first().copied()),
            Some(Operator::Assign) if nested => {
                Err(ParseError::invalid_expression("assignment inside parentheses").into())
            },
            Some(Operator::Assign) => {
                self.assign()?;
                Ok(None)
            },
            Some(_) => {
                let value = self.working.reduce()?;
                debug!("{expression} => {value}");
                Ok(Some(value))
            },
        }
    }
}
