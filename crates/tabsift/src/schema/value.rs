//! Scalar cell values.

use std::fmt;

/// A single cell in a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value (empty cell, NA token, JSON null).
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Hashable identity of a cell, used for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Missing,
    Bool(bool),
    Int(i64),
    Float(u64),
    Text(String),
}

impl Value {
    /// Check whether the cell counts as missing. A NaN float is missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Coerce the cell to a number; invalid entries yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let number = match self {
            Value::Missing => return None,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if number.is_nan() { None } else { Some(number) }
    }

    /// Render the cell as text. Missing renders as `nan`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Missing => "nan".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Text(s) => s.clone(),
        }
    }

    /// Render the cell for a CSV field. Missing renders as an empty field.
    pub fn to_csv_field(&self) -> String {
        if self.is_missing() {
            String::new()
        } else {
            self.to_text()
        }
    }

    pub(crate) fn key(&self) -> ValueKey {
        match self {
            Value::Missing => ValueKey::Missing,
            Value::Float(f) if f.is_nan() => ValueKey::Missing,
            Value::Bool(b) => ValueKey::Bool(*b),
            Value::Int(i) => ValueKey::Int(*i),
            // -0.0 and 0.0 are the same value
            Value::Float(f) => ValueKey::Float((*f + 0.0).to_bits()),
            Value::Text(s) => ValueKey::Text(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

/// Format a float the way interactive data tools print it: whole numbers keep
/// a trailing `.0`, very large or very small magnitudes use exponent notation.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(exp) => format!(
                    "{}e{}{:02}",
                    mantissa,
                    if exp < 0 { '-' } else { '+' },
                    exp.abs()
                ),
                Err(_) => formatted.clone(),
            },
            None => formatted,
        };
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}
