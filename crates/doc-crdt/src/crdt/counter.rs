//! Convergent numeric counter.

use serde_json::Value;

use crate::clock::Ticket;

use super::error::CrdtError;
use super::primitive::Primitive;
use super::value::PrimitiveValue;

// ── CounterType / CounterValue ─────────────────────────────────────────────

/// Declared accumulator width of a [`Counter`]. These two are the only
/// counter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterType {
    IntegerCnt,
    LongCnt,
}

/// The accumulator, stored at its declared width.
///
/// Keeping the width inside the union ties it to [`CounterType`] at
/// construction time: a `LongCnt` accumulator can never silently narrow to
/// 32 bits, even while its value fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterValue {
    Integer(i32),
    Long(i64),
}

impl CounterValue {
    pub fn counter_type(&self) -> CounterType {
        match self {
            CounterValue::Integer(_) => CounterType::IntegerCnt,
            CounterValue::Long(_) => CounterType::LongCnt,
        }
    }
}

/// Decode a wire payload into an accumulator of the declared width,
/// little-endian.
pub fn value_from_bytes(counter_type: CounterType, data: &[u8]) -> Result<CounterValue, CrdtError> {
    let invalid = |kind| CrdtError::InvalidPayload {
        kind,
        len: data.len(),
    };
    match counter_type {
        CounterType::IntegerCnt => {
            let bytes: [u8; 4] = data.try_into().map_err(|_| invalid("integer counter"))?;
            Ok(CounterValue::Integer(i32::from_le_bytes(bytes)))
        }
        CounterType::LongCnt => {
            let bytes: [u8; 8] = data.try_into().map_err(|_| invalid("long counter"))?;
            Ok(CounterValue::Long(i64::from_le_bytes(bytes)))
        }
    }
}

// ── Counter ────────────────────────────────────────────────────────────────

/// A convergent counter leaf.
///
/// [`increase`](Counter::increase) is fixed-width modular addition, which is
/// commutative and associative. Replicas that apply the same set of
/// increases in any arrival order therefore converge to the same
/// accumulator, overflow included, with no coordination, ordering, or
/// ticket comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: CounterValue,
    created_at: Ticket,
}

impl Counter {
    /// Create a counter of the declared width from a raw value.
    ///
    /// Integer inputs narrow or widen two's-complement style; double inputs
    /// truncate toward zero first. A non-numeric value fails with
    /// [`CrdtError::UnsupportedValueType`] before any state is created.
    pub fn new(
        counter_type: CounterType,
        value: impl Into<PrimitiveValue>,
        created_at: Ticket,
    ) -> Result<Self, CrdtError> {
        let value = value.into();
        let value = match counter_type {
            CounterType::IntegerCnt => CounterValue::Integer(coerce_i32(&value)?),
            CounterType::LongCnt => CounterValue::Long(coerce_i64(&value)?),
        };
        Ok(Self { value, created_at })
    }

    pub fn counter_type(&self) -> CounterType {
        self.value.counter_type()
    }

    pub fn value(&self) -> CounterValue {
        self.value
    }

    pub fn created_at(&self) -> Ticket {
        self.created_at
    }

    /// Add a numeric operand to the accumulator at its declared width.
    ///
    /// Overflow wraps: adding 1 to an `IntegerCnt` at `i32::MAX` yields
    /// `i32::MIN` on every replica. A non-numeric operand fails without
    /// touching the accumulator.
    pub fn increase(&mut self, operand: &Primitive) -> Result<(), CrdtError> {
        match &mut self.value {
            CounterValue::Integer(n) => {
                let delta = coerce_i32(operand.value())?;
                *n = n.wrapping_add(delta);
            }
            CounterValue::Long(n) => {
                let delta = coerce_i64(operand.value())?;
                *n = n.wrapping_add(delta);
            }
        }
        Ok(())
    }

    /// Canonical base-10 text of the accumulator.
    pub fn marshal(&self) -> String {
        match self.value {
            CounterValue::Integer(n) => n.to_string(),
            CounterValue::Long(n) => n.to_string(),
        }
    }

    /// JSON read surface of this leaf.
    pub fn view(&self) -> Value {
        match self.value {
            CounterValue::Integer(n) => Value::from(n),
            CounterValue::Long(n) => Value::from(n),
        }
    }

    /// Accumulator in wire form, little-endian at the declared width.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.value {
            CounterValue::Integer(n) => n.to_le_bytes().to_vec(),
            CounterValue::Long(n) => n.to_le_bytes().to_vec(),
        }
    }
}

fn coerce_i32(value: &PrimitiveValue) -> Result<i32, CrdtError> {
    match value {
        PrimitiveValue::Integer(n) => Ok(*n),
        // Two's-complement truncation, not saturation.
        PrimitiveValue::Long(n) => Ok(*n as i32),
        PrimitiveValue::Double(d) => Ok(d.trunc() as i64 as i32),
        other => Err(CrdtError::UnsupportedValueType {
            kind: other.kind().name(),
        }),
    }
}

fn coerce_i64(value: &PrimitiveValue) -> Result<i64, CrdtError> {
    match value {
        PrimitiveValue::Integer(n) => Ok(i64::from(*n)),
        PrimitiveValue::Long(n) => Ok(*n),
        PrimitiveValue::Double(d) => Ok(d.trunc() as i64),
        other => Err(CrdtError::UnsupportedValueType {
            kind: other.kind().name(),
        }),
    }
}
