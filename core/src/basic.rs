//! Scalar argument types.

use crate::argument_type::TypedArgument;
use crate::error::{ArgumentError, Result, ValidationError};

/// Signed 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Integer;

impl TypedArgument for Integer {
    type Output = i64;

    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError> {
        raw.parse::<i64>()
            .map(|_| ())
            .map_err(|_| ValidationError::Rule(format!("'{raw}' is not an integer")))
    }

    fn convert(&self, raw: &str) -> Result<i64> {
        raw.parse::<i64>()
            .map_err(|e| ArgumentError::conversion(raw, e))
    }

    fn format(&self, value: &i64) -> String {
        value.to_string()
    }

    fn title(&self) -> String {
        "integer".to_string()
    }
}

/// Finite or infinite 64-bit float. `NaN` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Real;

impl TypedArgument for Real {
    type Output = f64;

    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError> {
        match raw.parse::<f64>() {
            Ok(v) if !v.is_nan() => Ok(()),
            _ => Err(ValidationError::Rule(format!("'{raw}' is not a real number"))),
        }
    }

    fn convert(&self, raw: &str) -> Result<f64> {
        raw.parse::<f64>()
            .map_err(|e| ArgumentError::conversion(raw, e))
    }

    fn format(&self, value: &f64) -> String {
        value.to_string()
    }

    fn title(&self) -> String {
        "real number".to_string()
    }
}

/// Free text; every string is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Text;

impl TypedArgument for Text {
    type Output = String;

    fn check(&self, _raw: &str) -> std::result::Result<(), ValidationError> {
        Ok(())
    }

    fn convert(&self, raw: &str) -> Result<String> {
        Ok(raw.to_string())
    }

    fn format(&self, value: &String) -> String {
        value.clone()
    }

    fn title(&self) -> String {
        "text".to_string()
    }
}

/// `true`/`false`, `yes`/`no`, `on`/`off` or `1`/`0`, in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boolean;

impl Boolean {
    fn parse(raw: &str) -> Option<bool> {
        match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl TypedArgument for Boolean {
    type Output = bool;

    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError> {
        Self::parse(raw)
            .map(|_| ())
            .ok_or_else(|| ValidationError::Rule(format!("'{raw}' is not a boolean")))
    }

    fn convert(&self, raw: &str) -> Result<bool> {
        Self::parse(raw).ok_or_else(|| ArgumentError::conversion(raw, "not a boolean"))
    }

    fn format(&self, value: &bool) -> String {
        value.to_string()
    }

    fn title(&self) -> String {
        "boolean".to_string()
    }
}
