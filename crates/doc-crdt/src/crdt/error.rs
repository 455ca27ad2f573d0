use thiserror::Error;

/// Errors produced by the value layer.
///
/// Overflow is never an error here: counters wrap by definition. A failed
/// operation leaves the target value untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrdtError {
    /// A non-numeric value reached counter construction or an increase
    /// operand. This is a protocol-level fault; the originating operation
    /// must be rejected, not partially applied.
    #[error("unsupported value type: {kind}")]
    UnsupportedValueType { kind: &'static str },

    /// A wire payload whose bytes do not decode as the declared kind.
    #[error("invalid {kind} payload of {len} bytes")]
    InvalidPayload { kind: &'static str, len: usize },
}
