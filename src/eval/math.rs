use super::{AngleMode, Calculator, EvalError};
use crate::resolver::Op;
use crate::value::Number;

fn domain_error(op: Op, value: f64) -> EvalError {
    EvalError::Domain {
        op: op.name().to_string(),
        value: Number::Float(value).to_string(),
    }
}

impl Calculator {
    /// Pop one operand for `op` as a float
    fn pop_f64(&mut self, op: Op) -> Result<f64, EvalError> {
        Ok(self.stack.pop_for(op.name())?.to_f64())
    }

    /// Angle argument in radians, per the current mode
    fn pop_angle(&mut self, op: Op) -> Result<f64, EvalError> {
        let x = self.pop_f64(op)?;
        Ok(match self.angle_mode {
            AngleMode::Degrees => x.to_radians(),
            AngleMode::Radians => x,
        })
    }

    /// Angle result in the current mode's unit
    fn angle_result(&self, radians: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Degrees => radians.to_degrees(),
            AngleMode::Radians => radians,
        }
    }

    /// Push a float result and yield it
    fn push_float(&mut self, x: f64) -> Result<Option<Number>, EvalError> {
        Ok(self.push_result(Number::Float(x)))
    }

    // ========================================
    // Powers and roots
    // ========================================

    /// x -> x*x (exact for integers)
    pub(crate) fn op_square(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.stack.pop_for(Op::Square.name())?;
        Ok(self.push_result(x.clone() * x))
    }

    /// x -> sqrt(x); x < 0 is a domain error
    pub(crate) fn op_sqrt(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_f64(Op::Sqrt)?;
        if x < 0.0 {
            return Err(domain_error(Op::Sqrt, x));
        }
        self.push_float(x.sqrt())
    }

    /// a b -> a^b
    ///
    /// A zero base with a negative exponent, or a NaN result from non-NaN
    /// operands (negative base, fractional exponent), is a domain error.
    pub(crate) fn op_pow(&mut self) -> Result<Option<Number>, EvalError> {
        self.binary(Op::Pow, |a, b| {
            let (base, exp) = (a.to_f64(), b.to_f64());
            let result = base.powf(exp);
            let undefined = (base == 0.0 && exp < 0.0)
                || (result.is_nan() && !base.is_nan() && !exp.is_nan());
            if undefined {
                return Err(EvalError::Domain {
                    op: Op::Pow.name().to_string(),
                    value: format!("{}, {}", a, b),
                });
            }
            Ok(Number::Float(result))
        })
    }

    // ========================================
    // Trigonometry
    // ========================================

    pub(crate) fn op_sin(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_angle(Op::Sin)?;
        self.push_float(x.sin())
    }

    pub(crate) fn op_cos(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_angle(Op::Cos)?;
        self.push_float(x.cos())
    }

    pub(crate) fn op_tan(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_angle(Op::Tan)?;
        self.push_float(x.tan())
    }

    /// Input must be in [-1, 1]
    pub(crate) fn op_asin(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_f64(Op::Asin)?;
        if x.abs() > 1.0 {
            return Err(domain_error(Op::Asin, x));
        }
        let r = self.angle_result(x.asin());
        self.push_float(r)
    }

    /// Input must be in [-1, 1]
    pub(crate) fn op_acos(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_f64(Op::Acos)?;
        if x.abs() > 1.0 {
            return Err(domain_error(Op::Acos, x));
        }
        let r = self.angle_result(x.acos());
        self.push_float(r)
    }

    pub(crate) fn op_atan(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_f64(Op::Atan)?;
        let r = self.angle_result(x.atan());
        self.push_float(r)
    }

    // ========================================
    // Exponential and logarithm
    // ========================================

    /// Natural log; x <= 0 is a domain error
    pub(crate) fn op_ln(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_f64(Op::Ln)?;
        if x <= 0.0 {
            return Err(domain_error(Op::Ln, x));
        }
        self.push_float(x.ln())
    }

    pub(crate) fn op_exp(&mut self) -> Result<Option<Number>, EvalError> {
        let x = self.pop_f64(Op::Exp)?;
        self.push_float(x.exp())
    }
}
