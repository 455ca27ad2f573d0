//! Immutable scalar leaf values.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::clock::Ticket;

use super::strings::escape_string;
use super::value::PrimitiveValue;

/// An immutable scalar leaf: a typed value plus the ticket of the operation
/// that created it.
///
/// Primitives are read-only operands. A merge consumes them; it never
/// mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    value: PrimitiveValue,
    created_at: Ticket,
}

impl Primitive {
    pub fn new(value: impl Into<PrimitiveValue>, created_at: Ticket) -> Self {
        Self {
            value: value.into(),
            created_at,
        }
    }

    pub fn value(&self) -> &PrimitiveValue {
        &self.value
    }

    pub fn created_at(&self) -> Ticket {
        self.created_at
    }

    /// Canonical document text form. Deterministic: two replicas holding
    /// equal values produce byte-identical output.
    pub fn marshal(&self) -> String {
        match &self.value {
            PrimitiveValue::Null => "null".to_string(),
            PrimitiveValue::Bool(b) => b.to_string(),
            PrimitiveValue::Integer(n) => n.to_string(),
            PrimitiveValue::Long(n) => n.to_string(),
            PrimitiveValue::Double(d) => d.to_string(),
            PrimitiveValue::Str(s) => format!("\"{}\"", escape_string(s)),
            PrimitiveValue::Bytes(b) => format!("\"{}\"", BASE64.encode(b)),
            PrimitiveValue::Date(d) => format!("\"{}\"", format_date(d)),
        }
    }

    /// JSON read surface of this leaf. Strings are raw (unescaped) here;
    /// escaping belongs to [`marshal`](Self::marshal) only.
    pub fn view(&self) -> Value {
        match &self.value {
            PrimitiveValue::Null => Value::Null,
            PrimitiveValue::Bool(b) => Value::from(*b),
            PrimitiveValue::Integer(n) => Value::from(*n),
            PrimitiveValue::Long(n) => Value::from(*n),
            PrimitiveValue::Double(d) => Value::from(*d),
            PrimitiveValue::Str(s) => Value::from(s.clone()),
            PrimitiveValue::Bytes(b) => Value::from(BASE64.encode(b)),
            PrimitiveValue::Date(d) => Value::from(format_date(d)),
        }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::INITIAL_TICKET;
    use chrono::TimeZone;

    #[test]
    fn marshal_renders_each_kind() {
        let t = INITIAL_TICKET;
        assert_eq!(Primitive::new(PrimitiveValue::Null, t).marshal(), "null");
        assert_eq!(Primitive::new(true, t).marshal(), "true");
        assert_eq!(Primitive::new(-7i32, t).marshal(), "-7");
        assert_eq!(Primitive::new(1i64 << 40, t).marshal(), "1099511627776");
        assert_eq!(Primitive::new(3.14f64, t).marshal(), "3.14");
        assert_eq!(Primitive::new("a\"b", t).marshal(), r#""a\\"b""#);
        assert_eq!(Primitive::new(vec![1u8, 2, 3], t).marshal(), "\"AQID\"");

        let date = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            Primitive::new(date, t).marshal(),
            "\"2023-11-14T22:13:20.123Z\""
        );
    }

    #[test]
    fn view_leaves_strings_unescaped() {
        let p = Primitive::new("a\"b\n", INITIAL_TICKET);
        assert_eq!(p.view(), Value::from("a\"b\n"));
    }
}
