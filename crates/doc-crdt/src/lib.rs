//! CRDT value layer for collaborative JSON-like documents.
//!
//! Independent replicas apply edits locally and exchange them later; the
//! leaf values here make that safe without coordination. A [`Counter`]
//! merges concurrent increases by fixed-width modular addition, so every
//! arrival order of the same operand set converges to the same accumulator,
//! overflow included. [`Primitive`] is the immutable typed operand those
//! merges consume, and [`escape_string`] produces the double-escaped text
//! form the serialized document embeds.
//!
//! Every value carries the [`clock::Ticket`] of the operation that created
//! it. Tickets come from the document's change machinery; this crate only
//! consumes them.
//!
//! ```
//! use doc_crdt::clock::INITIAL_TICKET;
//! use doc_crdt::{Counter, CounterType, Primitive};
//!
//! let mut counter = Counter::new(CounterType::IntegerCnt, 5, INITIAL_TICKET)?;
//! counter.increase(&Primitive::new(10, INITIAL_TICKET))?;
//! counter.increase(&Primitive::new(3.14, INITIAL_TICKET))?;
//! assert_eq!(counter.marshal(), "18");
//! # Ok::<(), doc_crdt::CrdtError>(())
//! ```

pub mod clock;
pub mod crdt;

pub use clock::{ActorId, Ticket, INITIAL_TICKET, MAX_TICKET};
pub use crdt::{
    escape_string, value_from_bytes, Counter, CounterType, CounterValue, CrdtError, Primitive,
    PrimitiveKind, PrimitiveValue,
};
