//! CRDT leaf values of the document tree.
//!
//! | Rust type     | Semantics                                        |
//! |---------------|--------------------------------------------------|
//! | [`Primitive`] | Immutable typed scalar, operand for merges       |
//! | [`Counter`]   | Convergent numeric accumulator (32- or 64-bit)   |
//!
//! Container types (text, array, object) and the document-level marshal
//! driver live above this layer and consume these leaves.

mod counter;
mod error;
mod primitive;
mod strings;
mod value;

pub use counter::{value_from_bytes, Counter, CounterType, CounterValue};
pub use error::CrdtError;
pub use primitive::Primitive;
pub use strings::escape_string;
pub use value::{PrimitiveKind, PrimitiveValue};
