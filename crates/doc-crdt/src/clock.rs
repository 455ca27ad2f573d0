//! Logical clock stamps for document operations.
//!
//! Every leaf value in the document tree is tagged with the [`Ticket`] of
//! the operation that created it. Tickets are issued by the document's
//! change machinery; this crate consumes them as opaque, totally ordered,
//! immutable stamps and never generates or validates them.

use std::cmp::Ordering;
use std::fmt;

// ── ActorId ────────────────────────────────────────────────────────────────

/// Identity of the replica that issued an operation.
///
/// Twelve raw bytes, printed as 24 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId([u8; 12]);

/// The actor attached to values that exist before any replica has edited.
pub const INITIAL_ACTOR_ID: ActorId = ActorId([0; 12]);

/// An actor that compares after every real replica identity.
pub const MAX_ACTOR_ID: ActorId = ActorId([0xFF; 12]);

impl ActorId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// ── Ticket ─────────────────────────────────────────────────────────────────

/// A logical-clock stamp: Lamport time, a delimiter distinguishing
/// operations issued at the same Lamport time, and the issuing actor.
///
/// The ordering `(lamport, actor, delimiter)` is total across replicas, so
/// any two tickets are comparable without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub lamport: u64,
    pub delimiter: u32,
    pub actor: ActorId,
}

/// The ticket attached to values that exist before any edit.
pub const INITIAL_TICKET: Ticket = Ticket {
    lamport: 0,
    delimiter: 0,
    actor: INITIAL_ACTOR_ID,
};

/// A ticket that compares after every ticket a replica can issue.
pub const MAX_TICKET: Ticket = Ticket {
    lamport: u64::MAX,
    delimiter: u32::MAX,
    actor: MAX_ACTOR_ID,
};

impl Ticket {
    pub const fn new(lamport: u64, delimiter: u32, actor: ActorId) -> Self {
        Self {
            lamport,
            delimiter,
            actor,
        }
    }

    /// Stable key form, `lamport:actor:delimiter`, used by document indexes.
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.lamport, self.actor, self.delimiter)
    }

    /// True if `self` was issued at or after `other` in the total order.
    pub fn after_or_equal(&self, other: &Ticket) -> bool {
        self.cmp(other) != Ordering::Less
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lamport
            .cmp(&other.lamport)
            .then_with(|| self.actor.cmp(&other.actor))
            .then_with(|| self.delimiter.cmp(&other.delimiter))
    }
}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
