//! Display formatting for calculator values
//!
//! - Engineering notation (exponent a multiple of 3, optional SI prefix)
//! - Hexadecimal for integers
//! - Seconds as a clock duration

use num_traits::Signed;
use serde::Deserialize;

use crate::value::Number;

/// SI prefixes for exponents -24, -21, ..., 24 (index 8 is exponent 0)
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Engineering-format parameters. Presentation only; stored values are
/// never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngFormat {
    /// Significant digits of the mantissa
    pub digits: usize,
    /// Use SI prefix letters (`k`, `µ`) instead of `e<N>`
    pub si: bool,
}

impl Default for EngFormat {
    fn default() -> Self {
        EngFormat { digits: 4, si: true }
    }
}

impl EngFormat {
    pub fn format(&self, x: f64) -> String {
        format_engineering(x, self.digits, self.si)
    }
}

/// `abs` rounded to `digits` significant figures: the figures without a
/// decimal point, and the decimal exponent of the first one
fn round_significant(abs: f64, digits: usize) -> (String, i32) {
    let sci = format!("{:.*e}", digits - 1, abs);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    (mantissa.replace('.', ""), exp.parse().unwrap_or(0))
}

/// Put the decimal point after `int_digits` figures, padding with zeros
/// when there are fewer figures than that: ("1", 3) -> "100"
fn place_point(figures: &str, int_digits: usize) -> String {
    if figures.len() <= int_digits {
        format!("{:0<width$}", figures, width = int_digits)
    } else {
        format!("{}.{}", &figures[..int_digits], &figures[int_digits..])
    }
}

fn exponent_suffix(exp3: i32, si: bool) -> String {
    if exp3 == 0 {
        String::new()
    } else if si && (-24..=24).contains(&exp3) {
        SI_PREFIXES[((exp3 + 24) / 3) as usize].to_string()
    } else {
        format!("e{}", exp3)
    }
}

/// Format `x` in engineering notation.
///
/// ```
/// use rpncalc::display::format_engineering;
///
/// assert_eq!(format_engineering(1230.0, 3, false), "1.23e3");
/// assert_eq!(format_engineering(1230.0, 3, true), "1.23k");
/// assert_eq!(format_engineering(-0.0000123, 3, true), "-12.3µ");
/// ```
pub fn format_engineering(x: f64, significant_digits: usize, use_si_prefix: bool) -> String {
    let digits = significant_digits.max(1);
    if !x.is_finite() {
        return Number::Float(x).to_string();
    }
    if x == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let sign = if x < 0.0 { "-" } else { "" };

    // Rounding happens before the exponent is chosen, so 999.96 at three
    // figures is already 1.00e3
    let (figures, exp) = round_significant(x.abs(), digits);
    let exp3 = exp - exp.rem_euclid(3);
    let text = place_point(&figures, (exp - exp3) as usize + 1);

    format!("{}{}{}", sign, text, exponent_suffix(exp3, use_si_prefix))
}

/// Hexadecimal rendering of an integral value: `0xff`, `-0x10`.
/// Non-integral values have none.
pub fn format_hex(value: &Number) -> Option<String> {
    let n = value.to_bigint()?;
    let sign = if n.is_negative() { "-" } else { "" };
    Some(format!("{}0x{:x}", sign, n.magnitude()))
}

/// Seconds as `H:MM:SS`, with milliseconds when not whole: `1:01:01.500`
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return Number::Float(seconds).to_string();
    }
    let sign = if seconds < 0.0 { "-" } else { "" };
    let millis = (seconds.abs() * 1000.0).round() as u64;
    let hours = millis / 3_600_000;
    let minutes = millis / 60_000 % 60;
    let secs = millis / 1000 % 60;
    let frac = millis % 1000;

    if frac == 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, secs)
    } else {
        format!("{}{}:{:02}:{:02}.{:03}", sign, hours, minutes, secs, frac)
    }
}
