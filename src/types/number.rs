//! String-backed decimal that tolerates Wallex's mixed number encodings.
//!
//! Wallex sends prices, volumes and percentages either as quoted strings
//! (`"100.5"`) or as bare JSON numbers (`100.5`), sometimes for the same field.
//! [`Number`] keeps quoted values verbatim, so no precision is lost, and
//! renders bare numbers with six fixed decimals.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A number or a number string.
///
/// Decoding never fails: `null`, booleans, objects, arrays and strings that
/// are not numeric all yield an absent value.
///
/// # Example
///
/// ```rust
/// use wallex_api_client::Number;
///
/// let quoted: Number = serde_json::from_str(r#""0.00012345""#).unwrap();
/// assert_eq!(quoted.as_str(), "0.00012345");
///
/// let bare: Number = serde_json::from_str("1.5").unwrap();
/// assert_eq!(bare.as_str(), "1.500000");
///
/// let missing: Number = serde_json::from_str(r#""n/a""#).unwrap();
/// assert!(missing.is_absent());
/// assert_eq!(missing.as_f64(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Create a number from text, or an absent number if it is not numeric.
    ///
    /// Text that overflows `f64` (e.g. `"1e400"`) is absent too. Only the
    /// explicit `inf`/`infinity` tokens may hold an infinite value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() || is_infinity_token(&value) => Self(value),
            _ => Self::absent(),
        }
    }

    /// The absent value.
    pub fn absent() -> Self {
        Self(String::new())
    }

    /// Returns true if no usable numeric value was decoded.
    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    /// The value as a 64-bit float, or `0.0` when absent.
    pub fn as_f64(&self) -> f64 {
        self.0.parse().unwrap_or_default()
    }

    /// The stored text. Empty when absent.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as an exact decimal.
    ///
    /// Returns `None` when absent or when the text is outside what
    /// [`Decimal`] can represent (e.g. `"inf"`).
    pub fn to_decimal(&self) -> Option<Decimal> {
        if self.is_absent() {
            return None;
        }
        Decimal::from_str(&self.0)
            .or_else(|_| Decimal::from_scientific(&self.0))
            .ok()
    }

    fn from_float(value: f64) -> Self {
        Self(format!("{:.6}", value))
    }

    /// A bare JSON number literal, rendered with six decimals.
    fn from_literal(literal: &str) -> Self {
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from_float(value),
            _ => Self::absent(),
        }
    }
}

fn is_infinity_token(value: &str) -> bool {
    let unsigned = value.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Key under which serde_json's `arbitrary_precision` feature hands a number
/// literal to `deserialize_any` visitors.
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::from_float(value)
        } else {
            Self::absent()
        }
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Number {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl FromStr for Number {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_absent() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::new(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::new(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from_float(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from_float(v as f64))
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::absent())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::absent())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::absent())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Number::absent())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(key) = map.next_key::<String>()? else {
            return Ok(Number::absent());
        };
        if key == JSON_NUMBER_TOKEN {
            let literal: String = map.next_value()?;
            return Ok(Number::from_literal(&literal));
        }

        map.next_value::<IgnoredAny>()?;
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Number::absent())
    }
}
