use alloc::format;
use alloc::string::String;
use core::fmt;

/// A primitive option value.
///
/// With `feature = "serde"`, values (de)serialize untagged, i.e. as a plain JSON string, number or
/// boolean.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Coercive equality between primitives.
    ///
    /// Same-kind values compare directly (`NaN` never equals anything). Mixed kinds are compared
    /// numerically: booleans become `0`/`1` and strings are parsed as numbers, so `"1" ≈ 1`,
    /// `true ≈ 1` and `" 2 " ≈ 2`, while `"abc"` never equals a number.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => self.to_number() == other.to_number(),
        }
    }

    /// Numeric coercion used by [`Value::loose_eq`].
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
            Self::Number(n) => *n,
            Self::String(s) => parse_number(s),
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // `f64::from_str` also accepts "inf"/"nan" spellings, which must stay non-numeric here.
    let numeric = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_nan() => f.write_str("NaN"),
            Self::Number(n) if *n == f64::INFINITY => f.write_str("Infinity"),
            Self::Number(n) if *n == f64::NEG_INFINITY => f.write_str("-Infinity"),
            // `-0` prints as "0".
            Self::Number(n) if *n == 0.0 => f.write_str("0"),
            Self::Number(n) if abs(*n) >= 1e21 || abs(*n) < 1e-6 => write_exponential(f, *n),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

// Exponential form with an explicit exponent sign: `1e+21`, `1.5e-7`.
fn write_exponential(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => f.write_str(&formatted),
    }
}

fn abs(n: f64) -> f64 {
    if n < 0.0 { -n } else { n }
}
