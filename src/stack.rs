//! The operand stack
//!
//! Bottom of the stack is index 0; the most recently pushed value is on top.
//! Popping or peeking an empty stack is always an error, never a default.

use crate::eval::EvalError;
use crate::value::Number;

#[derive(Debug, Clone, Default)]
pub struct OperandStack {
    items: Vec<Number>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Number) {
        self.items.push(value);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<Number, EvalError> {
        self.pop_for("pop")
    }

    /// Pop on behalf of operation `op`, naming it in the underflow error
    pub(crate) fn pop_for(&mut self, op: &str) -> Result<Number, EvalError> {
        self.items
            .pop()
            .ok_or_else(|| EvalError::EmptyStack(op.to_string()))
    }

    /// Return the top value without removing it
    pub fn top(&self) -> Result<&Number, EvalError> {
        self.items
            .last()
            .ok_or_else(|| EvalError::EmptyStack("top".to_string()))
    }

    /// a -> a a
    pub fn duplicate(&mut self) -> Result<(), EvalError> {
        let n = self.pop_for("duplicate")?;
        self.items.push(n.clone());
        self.items.push(n);
        Ok(())
    }

    /// a b -> b a
    ///
    /// With a single element the first pop still happens before the
    /// underflow is detected, leaving the stack empty.
    pub fn swap(&mut self) -> Result<(), EvalError> {
        let x = self.pop_for("swap")?;
        let y = self.pop_for("swap")?;
        self.items.push(x);
        self.items.push(y);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stack contents, bottom first
    pub fn as_slice(&self) -> &[Number] {
        &self.items
    }
}
