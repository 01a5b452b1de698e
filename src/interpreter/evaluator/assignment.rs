use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        session::{Session, SessionResult},
        tokenizer::is_variable_name,
    },
};

impl Session {
    /// Stores the loaded assignment in the variable store.
    ///
    /// The working set must hold a target, one operand and the single
    /// [`crate::interpreter::tokenizer::Operator::Assign`]. The store is
    /// only written once everything else has been validated.
    pub(crate) fn assign(&mut self) -> SessionResult<()> {
        let Some(name) = self.working.target.take() else {
            return Err(ParseError::invalid_expression("assignment without a target").into());
        };
        debug_assert!(is_variable_name(&name));
        let [value] = self.working.operands[..] else {
            return Err(ParseError::invalid_expression("assignment needs exactly one value").into());
        };

        debug!("{name} = {value}");
        self.store.set(name, value);
        Ok(())
    }
}
