//! Evaluator: runs a line of tokens against the operand stack
//!
//! Each word of the line is handled in order:
//! - Numeric literals are pushed onto the stack
//! - Operation names are looked up in the registry and run
//! - User constants (from configuration) are pushed like literals
//! - Anything else is an unknown operation
//!
//! # Result of a line
//!
//! `evaluate()` returns what the *last* token produced. Operations that
//! compute something return the pushed value; stack-management and mode
//! operations return nothing; literal and constant pushes return nothing
//! unless `echo_literals` is enabled.
//!
//! ```text
//! 2 5 +        # Some(7)
//! 2 5 + 3      # None (last token is a literal)
//! 2 5 + dup    # None
//! ```
//!
//! # Errors
//!
//! The first failing token aborts the rest of the line. Nothing is rolled
//! back: pops that happened before the failure stay popped.

mod math;
mod stack;
mod tests;

use crate::display::EngFormat;
use crate::lexer::{self, Token};
use crate::resolver::{self, Op};
use crate::stack::OperandStack;
use crate::value::Number;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operation needed more operands than the stack held
    #[error("Stack underflow: {0}")]
    EmptyStack(String),
    /// A math function got an argument outside its domain
    #[error("Math domain error: {op}({value})")]
    Domain { op: String, value: String },
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    /// Reserved for literal syntax errors; malformed literals currently
    /// fall through to operation lookup
    #[error("Parse error: {0}")]
    Parse(String),
    /// A user constant may not reuse a built-in or numeric name
    #[error("Cannot define '{0}': name is reserved")]
    ReservedName(String),
}

/// How trigonometric functions interpret angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[serde(alias = "deg")]
    Degrees,
    #[default]
    #[serde(alias = "rad")]
    Radians,
}

/// The calculator: operand stack plus per-instance settings
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// The operand stack
    pub(crate) stack: OperandStack,
    /// Angle unit for sin/cos/tan and their inverses
    pub(crate) angle_mode: AngleMode,
    /// Engineering-format parameters for display
    pub(crate) eng: EngFormat,
    /// Whether literal and constant pushes yield their value
    pub(crate) echo_literals: bool,
    /// User-defined named constants
    pub(crate) constants: BTreeMap<String, Number>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a line of whitespace-separated tokens
    pub fn evaluate(&mut self, line: &str) -> Result<Option<Number>, EvalError> {
        let mut last = None;
        for word in lexer::split(line) {
            last = self.exec(word)?;
        }
        Ok(last)
    }

    /// Execute a single token
    pub fn exec(&mut self, word: &str) -> Result<Option<Number>, EvalError> {
        match lexer::classify(word) {
            Token::Integer(n) => {
                debug!(literal = %n, "push integer");
                Ok(self.push_literal(Number::Int(n)))
            }
            Token::Float(f) => {
                debug!(literal = f, "push float");
                Ok(self.push_literal(Number::Float(f)))
            }
            Token::Word(name) => {
                if let Some(op) = resolver::lookup(&name) {
                    return self.dispatch(op);
                }
                if let Some(value) = self.constants.get(&name).cloned() {
                    debug!(constant = %name, "push constant");
                    return Ok(self.push_literal(value));
                }
                Err(EvalError::UnknownOperation(name))
            }
        }
    }

    /// Run one operation
    pub fn dispatch(&mut self, op: Op) -> Result<Option<Number>, EvalError> {
        debug!(op = op.name(), depth = self.stack.len(), "dispatch");
        let result = match op {
            Op::Pop => self.op_pop(),
            Op::Clear => self.op_clear(),
            Op::Duplicate => self.op_duplicate(),
            Op::Swap => self.op_swap(),
            Op::Add => self.binary(op, |a, b| Ok(a + b)),
            Op::Sub => self.binary(op, |a, b| Ok(a - b)),
            Op::Mul => self.binary(op, |a, b| Ok(a * b)),
            Op::Div => self.binary(op, |a, b| Ok(a / b)),
            Op::Pi => Ok(self.push_literal(Number::Float(std::f64::consts::PI))),
            Op::E => Ok(self.push_literal(Number::Float(std::f64::consts::E))),
            Op::Square => self.op_square(),
            Op::Sqrt => self.op_sqrt(),
            Op::Pow => self.op_pow(),
            Op::Sin => self.op_sin(),
            Op::Cos => self.op_cos(),
            Op::Tan => self.op_tan(),
            Op::Asin => self.op_asin(),
            Op::Acos => self.op_acos(),
            Op::Atan => self.op_atan(),
            Op::Ln => self.op_ln(),
            Op::Exp => self.op_exp(),
            Op::Degrees => self.op_set_angle(AngleMode::Degrees),
            Op::Radians => self.op_set_angle(AngleMode::Radians),
        };
        trace!(depth = self.stack.len(), "after {}", op.name());
        result
    }

    /// Push a literal-like value; yields it only when echoing is enabled
    fn push_literal(&mut self, value: Number) -> Option<Number> {
        self.stack.push(value.clone());
        self.echo_literals.then_some(value)
    }

    /// Push a computed value and yield it
    pub(crate) fn push_result(&mut self, value: Number) -> Option<Number> {
        self.stack.push(value.clone());
        Some(value)
    }

    /// Pop `b` then `a` and push `f(a, b)`, so `a b -` is `a - b`
    pub(crate) fn binary<F>(&mut self, op: Op, f: F) -> Result<Option<Number>, EvalError>
    where
        F: FnOnce(Number, Number) -> Result<Number, EvalError>,
    {
        let b = self.stack.pop_for(op.name())?;
        let a = self.stack.pop_for(op.name())?;
        let value = f(a, b)?;
        Ok(self.push_result(value))
    }

    // ========================================
    // Stack access
    // ========================================

    pub fn push(&mut self, value: Number) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Result<Number, EvalError> {
        self.stack.pop()
    }

    pub fn top(&self) -> Result<&Number, EvalError> {
        self.stack.top()
    }

    /// Stack contents, bottom first
    pub fn stack(&self) -> &[Number] {
        self.stack.as_slice()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    // ========================================
    // Settings
    // ========================================

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    pub fn eng(&self) -> EngFormat {
        self.eng
    }

    pub fn set_eng(&mut self, eng: EngFormat) {
        self.eng = eng;
    }

    pub fn echo_literals(&self) -> bool {
        self.echo_literals
    }

    pub fn set_echo_literals(&mut self, echo: bool) {
        self.echo_literals = echo;
    }

    /// Define a named constant. Built-in operation names and words that
    /// classify as numbers are rejected.
    pub fn define_constant(&mut self, name: &str, value: Number) -> Result<(), EvalError> {
        let reserved = name.is_empty()
            || name.chars().any(char::is_whitespace)
            || resolver::is_builtin(name)
            || !matches!(lexer::classify(name), Token::Word(_));
        if reserved {
            return Err(EvalError::ReservedName(name.to_string()));
        }
        debug!(constant = name, value = %value, "define constant");
        self.constants.insert(name.to_string(), value);
        Ok(())
    }

    /// Names of user constants, sorted
    pub fn constant_names(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }
}
