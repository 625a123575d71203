//! Custom serde helpers for Wallex's loosely typed payloads.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Helper for timestamps that may be missing, null or malformed.
///
/// Wallex sends most timestamps as RFC 3339 strings, but some account fields
/// are `null`, `""` or a bare date. Anything that is not a valid RFC 3339
/// string becomes `None` rather than failing the whole response.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use time::OffsetDateTime;
/// use wallex_api_client::types::serde_helpers::lenient_rfc3339;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "lenient_rfc3339::deserialize", default)]
///     created_at: Option<OffsetDateTime>,
/// }
///
/// let json = r#"{"created_at":"2021-06-17T11:55:04Z"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert_eq!(response.created_at.unwrap().unix_timestamp(), 1_623_930_904);
///
/// let json = r#"{"created_at":"1990-01-01"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.created_at.is_none());
/// ```
pub mod lenient_rfc3339 {
    use super::*;

    /// Deserialize an RFC 3339 timestamp, returning None for anything else.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LenientVisitor;

        impl<'de> Visitor<'de> for LenientVisitor {
            type Value = Option<OffsetDateTime>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an RFC 3339 timestamp")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(OffsetDateTime::parse(v, &Rfc3339).ok())
            }

            fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_i64<E>(self, _v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_u64<E>(self, _v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_f64<E>(self, _v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(None)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(None)
            }
        }

        deserializer.deserialize_any(LenientVisitor)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// Some Wallex fields return `""` instead of null.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use wallex_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     client_order_id: Option<String>,
/// }
///
/// let json = r#"{"client_order_id":""}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.client_order_id.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Returns true for `None` and for `Some("")`.
///
/// Used with `skip_serializing_if` so blank optional strings never reach the wire.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
