//! Tokenization and classification of input words
//!
//! A line is split on runs of whitespace. Each word is then classified, in
//! this order:
//!
//! 1. Integer literal: decimal, `0x`/`0o`/`0b` prefixed, optional sign,
//!    single underscores between digits (`1_000`, `0xff_ff`)
//! 2. Float literal: anything `f64` parses (`3.14`, `.5`, `1e3`, `inf`)
//! 3. Otherwise a word, looked up by the evaluator
//!
//! Decimal integers with leading zeros (`010`) are not integer literals;
//! they fall through to the float path.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, one_of, satisfy},
    combinator::{all_consuming, map, opt, recognize, value},
    multi::{many0, many1},
    sequence::{pair, preceded},
    IResult,
};
use num_bigint::BigInt;

use crate::value::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Exact integer literal
    Integer(BigInt),
    /// Floating point literal
    Float(f64),
    /// Anything else: an operation name or a user constant
    Word(String),
}

impl Token {
    /// The literal's value, or `None` for a word
    pub fn into_number(self) -> Option<Number> {
        match self {
            Token::Integer(n) => Some(Number::Int(n)),
            Token::Float(f) => Some(Number::Float(f)),
            Token::Word(_) => None,
        }
    }
}

/// Parse one word, skipping leading whitespace
fn word(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(char::is_whitespace),
        take_while1(|c: char| !c.is_whitespace()),
    )(input)
}

/// Split a line into words. Empty words never occur.
pub fn split(input: &str) -> Vec<&str> {
    many0(word)(input)
        .map(|(_, words)| words)
        .unwrap_or_default()
}

/// One or more digits of `radix`, each optionally preceded by a single `_`
fn radix_digits<'a>(radix: u32) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(many1(preceded(
        opt(char('_')),
        satisfy(move |c| c.is_digit(radix)),
    )))
}

/// `0x1f`, `0o17`, `0b101` (prefix is case-insensitive)
fn prefixed(input: &str) -> IResult<&str, (u32, &str)> {
    let (input, radix) = alt((
        value(16, tag_no_case("0x")),
        value(8, tag_no_case("0o")),
        value(2, tag_no_case("0b")),
    ))(input)?;
    let (input, digits) = radix_digits(radix)(input)?;
    Ok((input, (radix, digits)))
}

/// `123`, `1_000`, or all zeros (`0`, `00`)
fn decimal(input: &str) -> IResult<&str, (u32, &str)> {
    let nonzero = recognize(pair(
        one_of("123456789"),
        many0(preceded(opt(char('_')), satisfy(|c| c.is_ascii_digit()))),
    ));
    let zeros = recognize(pair(char('0'), many0(preceded(opt(char('_')), char('0')))));
    map(alt((nonzero, zeros)), |digits| (10, digits))(input)
}

/// Sign, radix and raw digits of an integer literal
fn integer(input: &str) -> IResult<&str, (bool, u32, &str)> {
    let (input, sign) = opt(one_of("+-"))(input)?;
    let (input, (radix, digits)) = alt((prefixed, decimal))(input)?;
    Ok((input, (sign == Some('-'), radix, digits)))
}

/// Parse a complete word as an integer literal
pub fn parse_integer(word: &str) -> Option<BigInt> {
    let (_, (negative, radix, digits)) = all_consuming(integer)(word).ok()?;
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let n = BigInt::parse_bytes(cleaned.as_bytes(), radix)?;
    Some(if negative { -n } else { n })
}

/// Parse a complete word as a float literal
pub fn parse_float(word: &str) -> Option<f64> {
    word.parse::<f64>().ok()
}

/// Classify a single word. Numeric parsing takes priority over names.
pub fn classify(word: &str) -> Token {
    if let Some(n) = parse_integer(word) {
        return Token::Integer(n);
    }
    if let Some(f) = parse_float(word) {
        return Token::Float(f);
    }
    Token::Word(word.to_string())
}

/// Tokenize a whole line
pub fn lex(input: &str) -> Vec<Token> {
    split(input).into_iter().map(classify).collect()
}
