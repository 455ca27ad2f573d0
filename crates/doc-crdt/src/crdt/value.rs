//! The closed union of scalar kinds a document leaf can hold.

use chrono::{DateTime, TimeZone, Utc};

use super::error::CrdtError;

// ── PrimitiveKind ──────────────────────────────────────────────────────────

/// Kind tag for a [`PrimitiveValue`], used on the wire and in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Null,
    Boolean,
    Integer,
    Long,
    Double,
    String,
    Bytes,
    Date,
}

impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Null => "null",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
            PrimitiveKind::Bytes => "bytes",
            PrimitiveKind::Date => "date",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── PrimitiveValue ─────────────────────────────────────────────────────────

/// A typed scalar value. The union is closed: these eight kinds are the only
/// payloads a document leaf can carry, and a value never changes kind after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    Null,
    Bool(bool),
    Integer(i32),
    Long(i64),
    Double(f64),
    Str(String),
    Bytes(Vec<u8>),
    Date(DateTime<Utc>),
}

impl PrimitiveValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveValue::Null => PrimitiveKind::Null,
            PrimitiveValue::Bool(_) => PrimitiveKind::Boolean,
            PrimitiveValue::Integer(_) => PrimitiveKind::Integer,
            PrimitiveValue::Long(_) => PrimitiveKind::Long,
            PrimitiveValue::Double(_) => PrimitiveKind::Double,
            PrimitiveValue::Str(_) => PrimitiveKind::String,
            PrimitiveValue::Bytes(_) => PrimitiveKind::Bytes,
            PrimitiveValue::Date(_) => PrimitiveKind::Date,
        }
    }

    /// Whether this value can act as a counter operand.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveValue::Integer(_) | PrimitiveValue::Long(_) | PrimitiveValue::Double(_)
        )
    }

    /// Raw payload in the document wire form: fixed-width numbers are
    /// little-endian, strings are UTF-8, dates are unix milliseconds.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PrimitiveValue::Null => Vec::new(),
            PrimitiveValue::Bool(b) => vec![u8::from(*b)],
            PrimitiveValue::Integer(n) => n.to_le_bytes().to_vec(),
            PrimitiveValue::Long(n) => n.to_le_bytes().to_vec(),
            PrimitiveValue::Double(d) => d.to_le_bytes().to_vec(),
            PrimitiveValue::Str(s) => s.as_bytes().to_vec(),
            PrimitiveValue::Bytes(b) => b.clone(),
            PrimitiveValue::Date(d) => d.timestamp_millis().to_le_bytes().to_vec(),
        }
    }

    /// Decode a wire payload back into a value of the named kind.
    pub fn from_bytes(kind: PrimitiveKind, data: &[u8]) -> Result<Self, CrdtError> {
        let invalid = || CrdtError::InvalidPayload {
            kind: kind.name(),
            len: data.len(),
        };
        match kind {
            PrimitiveKind::Null => {
                if data.is_empty() {
                    Ok(PrimitiveValue::Null)
                } else {
                    Err(invalid())
                }
            }
            PrimitiveKind::Boolean => match data {
                [0] => Ok(PrimitiveValue::Bool(false)),
                [1] => Ok(PrimitiveValue::Bool(true)),
                _ => Err(invalid()),
            },
            PrimitiveKind::Integer => {
                let bytes: [u8; 4] = data.try_into().map_err(|_| invalid())?;
                Ok(PrimitiveValue::Integer(i32::from_le_bytes(bytes)))
            }
            PrimitiveKind::Long => {
                let bytes: [u8; 8] = data.try_into().map_err(|_| invalid())?;
                Ok(PrimitiveValue::Long(i64::from_le_bytes(bytes)))
            }
            PrimitiveKind::Double => {
                let bytes: [u8; 8] = data.try_into().map_err(|_| invalid())?;
                Ok(PrimitiveValue::Double(f64::from_le_bytes(bytes)))
            }
            PrimitiveKind::String => {
                let s = std::str::from_utf8(data).map_err(|_| invalid())?;
                Ok(PrimitiveValue::Str(s.to_string()))
            }
            PrimitiveKind::Bytes => Ok(PrimitiveValue::Bytes(data.to_vec())),
            PrimitiveKind::Date => {
                let bytes: [u8; 8] = data.try_into().map_err(|_| invalid())?;
                let millis = i64::from_le_bytes(bytes);
                Utc.timestamp_millis_opt(millis)
                    .single()
                    .map(PrimitiveValue::Date)
                    .ok_or_else(invalid)
            }
        }
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        PrimitiveValue::Bool(value)
    }
}

impl From<i32> for PrimitiveValue {
    fn from(value: i32) -> Self {
        PrimitiveValue::Integer(value)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        PrimitiveValue::Long(value)
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        PrimitiveValue::Double(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::Bytes(value)
    }
}

impl From<DateTime<Utc>> for PrimitiveValue {
    fn from(value: DateTime<Utc>) -> Self {
        PrimitiveValue::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_bytes_round_trip_every_kind() {
        let date = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let cases = vec![
            PrimitiveValue::Null,
            PrimitiveValue::Bool(true),
            PrimitiveValue::Integer(-42),
            PrimitiveValue::Long(i64::MIN),
            PrimitiveValue::Double(3.14),
            PrimitiveValue::Str("héllo".into()),
            PrimitiveValue::Bytes(vec![0, 1, 2, 255]),
            PrimitiveValue::Date(date),
        ];
        for value in cases {
            let decoded = PrimitiveValue::from_bytes(value.kind(), &value.to_bytes())
                .expect("round trip must decode");
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn short_or_malformed_payloads_are_rejected() {
        let err = PrimitiveValue::from_bytes(PrimitiveKind::Integer, &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            CrdtError::InvalidPayload {
                kind: "integer",
                len: 2
            }
        );

        assert!(PrimitiveValue::from_bytes(PrimitiveKind::Boolean, &[7]).is_err());
        assert!(PrimitiveValue::from_bytes(PrimitiveKind::Null, &[0]).is_err());
        assert!(PrimitiveValue::from_bytes(PrimitiveKind::String, &[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn only_the_three_numeric_kinds_are_numeric() {
        assert!(PrimitiveValue::Integer(1).is_numeric());
        assert!(PrimitiveValue::Long(1).is_numeric());
        assert!(PrimitiveValue::Double(1.0).is_numeric());
        assert!(!PrimitiveValue::Null.is_numeric());
        assert!(!PrimitiveValue::Bool(true).is_numeric());
        assert!(!PrimitiveValue::Str("1".into()).is_numeric());
        assert!(!PrimitiveValue::Bytes(vec![1]).is_numeric());
    }
}
