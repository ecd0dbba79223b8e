//! Common test utilities for rpncalc integration tests

pub use rpncalc::{Calculator, EvalError, Number};

/// Evaluate a line on a fresh calculator and render what it yields
pub fn eval(input: &str) -> Result<String, String> {
    let mut calc = Calculator::new();
    let result = calc.evaluate(input).map_err(|e| e.to_string())?;
    Ok(result.map(|v| v.to_string()).unwrap_or_default())
}

/// Evaluate lines in order on one calculator, returning the final stack
#[allow(dead_code)]
pub fn stack_after(lines: &[&str]) -> Result<Vec<String>, String> {
    let mut calc = Calculator::new();
    for line in lines {
        calc.evaluate(line).map_err(|e| e.to_string())?;
    }
    Ok(calc.stack().iter().map(|v| v.to_string()).collect())
}

/// Approximate float comparison on a rendered result
#[allow(dead_code)]
pub fn approx(output: &str, expected: f64, tolerance: f64) -> bool {
    output
        .parse::<f64>()
        .map_or(false, |v| (v - expected).abs() <= tolerance)
}
