use super::{AngleMode, Calculator, EvalError};
use crate::value::Number;

impl Calculator {
    /// a ->
    pub(crate) fn op_pop(&mut self) -> Result<Option<Number>, EvalError> {
        self.stack.pop()?;
        Ok(None)
    }

    /// ... ->
    pub(crate) fn op_clear(&mut self) -> Result<Option<Number>, EvalError> {
        self.stack.clear();
        Ok(None)
    }

    /// a -> a a
    pub(crate) fn op_duplicate(&mut self) -> Result<Option<Number>, EvalError> {
        self.stack.duplicate()?;
        Ok(None)
    }

    /// a b -> b a
    pub(crate) fn op_swap(&mut self) -> Result<Option<Number>, EvalError> {
        self.stack.swap()?;
        Ok(None)
    }

    pub(crate) fn op_set_angle(&mut self, mode: AngleMode) -> Result<Option<Number>, EvalError> {
        self.angle_mode = mode;
        Ok(None)
    }
}
