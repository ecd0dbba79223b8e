//! Calculator configuration (rpncalc.toml)
//!
//! ```toml
//! angle = "degrees"        # or "radians"
//! echo_literals = false
//!
//! [display]
//! digits = 4
//! si = true
//!
//! [constants]
//! g = 9.80665
//! mask = "0xff"            # strings are parsed as number literals
//! ```
//!
//! Environment variables override the file: `RPNCALC_ANGLE`,
//! `RPNCALC_DIGITS`, `RPNCALC_SI`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::display::EngFormat;
use crate::eval::{AngleMode, Calculator};
use crate::lexer;
use crate::value::Number;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid constant '{name}': {reason}")]
    InvalidConstant { name: String, reason: String },
    #[error("Invalid angle mode: {0}")]
    InvalidAngleMode(String),
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: String, value: String },
}

/// Settings applied to a new calculator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial angle mode
    pub angle: AngleMode,
    /// Literal and constant pushes yield their value
    pub echo_literals: bool,
    /// Engineering display parameters
    pub display: EngFormat,
    /// Named constants: name -> number or number literal string
    pub constants: BTreeMap<String, toml::Value>,
    /// Show the REPL banner
    #[serde(skip)]
    pub banner: bool,
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup` (variable name -> value)
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(angle) = lookup("RPNCALC_ANGLE") {
            self.angle = parse_angle_mode(&angle)?;
        }
        if let Some(digits) = lookup("RPNCALC_DIGITS") {
            self.display.digits = digits
                .trim()
                .parse()
                .ok()
                .filter(|d| *d > 0)
                .ok_or_else(|| ConfigError::InvalidEnv {
                    var: "RPNCALC_DIGITS".to_string(),
                    value: digits.clone(),
                })?;
        }
        if let Some(si) = lookup("RPNCALC_SI") {
            self.display.si = parse_flag(&si).ok_or_else(|| ConfigError::InvalidEnv {
                var: "RPNCALC_SI".to_string(),
                value: si.clone(),
            })?;
        }
        if let Some(banner) = lookup("RPNCALC_BANNER") {
            self.banner = parse_flag(&banner).unwrap_or(true);
        }
        Ok(())
    }

    /// The configured constants as numbers
    pub fn constants(&self) -> Result<Vec<(String, Number)>, ConfigError> {
        self.constants
            .iter()
            .map(|(name, value)| Ok((name.clone(), constant_value(name, value)?)))
            .collect()
    }

    /// Configure `calc` with these settings
    pub fn apply(&self, calc: &mut Calculator) -> Result<(), ConfigError> {
        calc.set_angle_mode(self.angle);
        calc.set_echo_literals(self.echo_literals);
        calc.set_eng(self.display);
        for (name, value) in self.constants()? {
            calc.define_constant(&name, value)
                .map_err(|e| ConfigError::InvalidConstant {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }
}

impl Calculator {
    /// Create a calculator configured by `config`
    pub fn with_config(config: &Config) -> Result<Self, ConfigError> {
        let mut calc = Calculator::new();
        config.apply(&mut calc)?;
        Ok(calc)
    }
}

/// `deg`/`degrees` or `rad`/`radians`, case-insensitive
pub fn parse_angle_mode(s: &str) -> Result<AngleMode, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "deg" | "degrees" => Ok(AngleMode::Degrees),
        "rad" | "radians" => Ok(AngleMode::Radians),
        _ => Err(ConfigError::InvalidAngleMode(s.to_string())),
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn constant_value(name: &str, value: &toml::Value) -> Result<Number, ConfigError> {
    match value {
        toml::Value::Integer(n) => Ok(Number::from(*n)),
        toml::Value::Float(f) => Ok(Number::from(*f)),
        toml::Value::String(s) => lexer::classify(s.trim())
            .into_number()
            .ok_or_else(|| ConfigError::InvalidConstant {
                name: name.to_string(),
                reason: format!("'{}' is not a number", s),
            }),
        other => Err(ConfigError::InvalidConstant {
            name: name.to_string(),
            reason: format!("expected a number, got {}", other.type_str()),
        }),
    }
}
