/// Single-valued kinds: booleans, integers, floats and plain text.
use tracing::trace;

use super::{FormatError, Value, ValueError};

/// Case-insensitive truthy/falsy token set.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "on" => Some(true),
        "0" | "f" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Shortest round-trip digits, in exponent form when the decimal exponent is
/// below -4 or at least 21 (`1e300`, `1e-7`), plain otherwise (`1000`, `0.001`).
fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let sci = format!("{v:e}");
    let exp = sci
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    if exp < -4 || exp >= 21 { sci } else { v.to_string() }
}

/// A boolean argument value. Bound flags act as switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolValue(bool);

impl BoolValue {
    #[must_use]
    pub fn new(init: bool) -> Self {
        Self(init)
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.0
    }
}

impl Value for BoolValue {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let v = parse_bool(raw).ok_or_else(|| FormatError::new(raw, "bool"))?;
        trace!(raw, value = v, "set bool");
        self.0 = v;
        Ok(())
    }

    fn format(&self) -> String {
        self.0.to_string()
    }

    fn is_switch(&self) -> bool {
        true
    }
}

/// A base-10 signed integer argument value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntValue(i64);

impl IntValue {
    #[must_use]
    pub fn new(init: i64) -> Self {
        Self(init)
    }

    #[must_use]
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Value for IntValue {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let v: i64 = raw.parse().map_err(|_| FormatError::new(raw, "i64"))?;
        trace!(raw, value = v, "set int");
        self.0 = v;
        Ok(())
    }

    fn format(&self) -> String {
        self.0.to_string()
    }
}

/// A 64-bit float argument value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatValue(f64);

impl FloatValue {
    #[must_use]
    pub fn new(init: f64) -> Self {
        Self(init)
    }

    #[must_use]
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Value for FloatValue {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let v: f64 = raw.parse().map_err(|_| FormatError::new(raw, "f64"))?;
        trace!(raw, value = v, "set float");
        self.0 = v;
        Ok(())
    }

    /// Shortest representation that parses back to the same `f64`.
    fn format(&self) -> String {
        format_float(self.0)
    }
}

/// A text argument value. Accepts anything verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValue(String);

impl StringValue {
    #[must_use]
    pub fn new(init: impl Into<String>) -> Self {
        Self(init.into())
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Value for StringValue {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        trace!(raw, "set string");
        raw.clone_into(&mut self.0);
        Ok(())
    }

    fn format(&self) -> String {
        self.0.clone()
    }
}
