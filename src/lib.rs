//! rpncalc - Reverse Polish Notation calculator
//!
//! # Overview
//!
//! Numbers push themselves onto a stack; operations pop their operands and
//! push the result. There is no precedence and no parentheses: tokens are
//! evaluated strictly left to right.
//!
//! ```text
//! 2 5 +            # 7
//! 10 5 -           # 5   (a b - is a - b)
//! 2 sq pi *        # 12.566...
//! 0x10 0b101 +     # 21  (integers stay exact)
//! deg 90 sin       # 1.0
//! ```
//!
//! # Numbers
//!
//! Integer literals (`10`, `0x1f`, `0o17`, `0b101`) are exact integers of
//! arbitrary width. Float literals (`3.5`, `.5`, `1e-3`) are f64. `+ - *`
//! keep integers exact; `/` and the math functions produce floats.
//!
//! # Example
//!
//! ```rust
//! use rpncalc::{Calculator, Number};
//!
//! let mut calc = Calculator::new();
//! let result = calc.evaluate("2 5 +").unwrap();
//! assert_eq!(result, Some(Number::from(7)));
//! assert_eq!(calc.stack(), &[Number::from(7)]);
//! ```

pub mod config;
pub mod display;
pub mod eval;
pub mod lexer;
pub mod resolver;
pub mod stack;
pub mod value;

// Re-export commonly used items
pub use config::{Config, ConfigError};
pub use display::{format_duration, format_engineering, format_hex, EngFormat};
pub use eval::{AngleMode, Calculator, EvalError};
pub use lexer::{classify, lex, Token};
pub use resolver::Op;
pub use stack::OperandStack;
pub use value::Number;

/// Convenience function to evaluate a line on a fresh calculator
pub fn evaluate(input: &str) -> Result<Option<Number>, EvalError> {
    Calculator::new().evaluate(input)
}
