//! Numeric values held on the operand stack
//!
//! A value is either an exact integer (arbitrary width) or an IEEE-754
//! double. Mixing the two widens to float, and `/` is always true division:
//!
//! ```text
//! 2 3 +        # Int(5)
//! 2 0.5 +      # Float(2.5)
//! 10 5 /       # Float(2.0)
//! ```

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone)]
pub enum Number {
    /// Exact integer, produced by integer literals and integer-only arithmetic
    Int(BigInt),
    /// Floating point, produced by float literals, division and math functions
    Float(f64),
}

impl Number {
    /// Widen to f64. Integers beyond the f64 range saturate to +/- infinity.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(n) => n.to_f64().unwrap_or(if n.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Number::Float(f) => *f,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Exact integer value, if this number has one.
    /// Integral finite floats convert; anything else is `None`.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Number::Int(n) => Some(n.clone()),
            Number::Float(f) if f.is_finite() && f.fract() == 0.0 => BigInt::from_f64(*f),
            Number::Float(_) => None,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(BigInt::zero())
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(BigInt::from(n))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(BigInt::from(n))
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

/// Numeric equality across representations: `Int(2) == Float(2.0)`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) if x.is_nan() => write!(f, "nan"),
            Number::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x < 0.0 { "-inf" } else { "inf" })
            }
            // Debug keeps the trailing ".0" on integral floats and uses
            // the shortest text that round-trips
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
            (a, b) => Number::Float(a.to_f64() + b.to_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a - b),
            (a, b) => Number::Float(a.to_f64() - b.to_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a * b),
            (a, b) => Number::Float(a.to_f64() * b.to_f64()),
        }
    }
}

/// True division. Dividing by zero follows f64 (inf or nan).
impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number::Float(self.to_f64() / rhs.to_f64())
    }
}
