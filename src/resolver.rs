//! Operation registry
//!
//! Maps operation names to [`Op`] identifiers. The table is static and shared
//! by every calculator instance; the behaviour of each `Op` lives in the
//! evaluator. Lookup is an exact string match.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Every operation the evaluator knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    // Stack management
    Pop,
    Clear,
    Duplicate,
    Swap,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Constants
    Pi,
    E,
    // Functions
    Square,
    Sqrt,
    Pow,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Exp,
    // Angle mode
    Degrees,
    Radians,
}

/// Name table: canonical names first, then short aliases.
pub const OPERATIONS: &[(&str, Op)] = &[
    ("pop", Op::Pop),
    ("clear", Op::Clear),
    ("duplicate", Op::Duplicate),
    ("swap", Op::Swap),
    ("+", Op::Add),
    ("-", Op::Sub),
    ("*", Op::Mul),
    ("/", Op::Div),
    ("pi", Op::Pi),
    ("e", Op::E),
    ("square", Op::Square),
    ("sqrt", Op::Sqrt),
    ("pow", Op::Pow),
    ("sin", Op::Sin),
    ("cos", Op::Cos),
    ("tan", Op::Tan),
    ("asin", Op::Asin),
    ("acos", Op::Acos),
    ("atan", Op::Atan),
    ("ln", Op::Ln),
    ("exp", Op::Exp),
    ("deg", Op::Degrees),
    ("rad", Op::Radians),
    // Aliases
    ("p", Op::Pop),
    ("c", Op::Clear),
    ("d", Op::Duplicate),
    ("dup", Op::Duplicate),
    ("w", Op::Swap),
    ("x", Op::Mul),
    ("sq", Op::Square),
];

fn table() -> &'static HashMap<&'static str, Op> {
    static TABLE: OnceLock<HashMap<&'static str, Op>> = OnceLock::new();
    TABLE.get_or_init(|| OPERATIONS.iter().copied().collect())
}

/// Look up an operation by its exact name
pub fn lookup(name: &str) -> Option<Op> {
    table().get(name).copied()
}

/// Check if a word names a built-in operation
pub fn is_builtin(name: &str) -> bool {
    table().contains_key(name)
}

/// All registered names (canonical and aliases), in table order
pub fn names() -> impl Iterator<Item = &'static str> {
    OPERATIONS.iter().map(|(name, _)| *name)
}

impl Op {
    /// The canonical name of this operation
    pub fn name(self) -> &'static str {
        OPERATIONS
            .iter()
            .find(|(_, op)| *op == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }
}
