use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a scalar cell value of a raw source record. values are typed once when
/// read so that each source adapter can ask for the type it expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AttributeValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl AttributeValue {
    /// types a raw text cell. empty cells are null, numbers are parsed as
    /// integers first, then floats, and `true`/`false` become booleans.
    /// integer-looking cells with leading zeros (`0042`) stay text.
    pub fn parse(s: &str) -> AttributeValue {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return AttributeValue::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            if has_leading_zero(trimmed) {
                return AttributeValue::Text(String::from(trimmed));
            }
            return AttributeValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return AttributeValue::Float(f);
            }
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "true" => AttributeValue::Bool(true),
            "false" => AttributeValue::Bool(false),
            _ => AttributeValue::Text(String::from(trimmed)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// integer view of this value. floats are accepted only when integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            AttributeValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            AttributeValue::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Integer(i) => Some(*i as f64),
            AttributeValue::Float(f) => Some(*f),
            AttributeValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// text view of this value, `None` when null. integral floats render
    /// without a fraction so numeric keys stay stable (`1234.0` -> `1234`).
    pub fn as_text(&self) -> Option<String> {
        match self {
            AttributeValue::Null => None,
            AttributeValue::Bool(b) => Some(b.to_string()),
            AttributeValue::Integer(i) => Some(i.to_string()),
            AttributeValue::Float(f) if f.fract() == 0.0 => Some((*f as i64).to_string()),
            AttributeValue::Float(f) => Some(f.to_string()),
            AttributeValue::Text(s) => Some(s.clone()),
        }
    }

    /// boolean view of this value, accepting flags encoded as 1/0 or Y/N.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            AttributeValue::Integer(i) => Some(*i != 0),
            AttributeValue::Float(f) => Some(*f != 0.0),
            AttributeValue::Text(s) => match s.to_ascii_lowercase().as_str() {
                "y" | "yes" | "t" => Some(true),
                "n" | "no" | "f" => Some(false),
                _ => None,
            },
            AttributeValue::Null => None,
        }
    }
}

fn has_leading_zero(digits: &str) -> bool {
    let unsigned = digits.trim_start_matches(['+', '-']);
    unsigned.len() > 1 && unsigned.starts_with('0')
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_text() {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "<null>"),
        }
    }
}
