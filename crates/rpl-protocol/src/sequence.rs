use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Correlation key echoed by the server in every response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(pub u64);

impl CommandId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues command identifiers.
///
/// Each connection context owns one sequence, so independent connections in
/// one process never share a counter. Issuance is a single atomic
/// `fetch_add`: identifiers are unique and strictly increasing in the order
/// callers obtain them, under any amount of concurrency.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A sequence whose first identifier is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Allocate the next identifier. Never reuses a value.
    pub fn next_id(&self) -> CommandId {
        CommandId(self.next.fetch_add(1, Ordering::SeqCst))
    }

    /// The identifier the next call to [`IdSequence::next_id`] would return.
    pub fn peek(&self) -> CommandId {
        CommandId(self.next.load(Ordering::SeqCst))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
