use std::collections::HashMap;
use std::sync::RwLock;

use rpl_protocol::{CommandId, Pending};

/// Commands sent and awaiting their response, keyed by identifier.
///
/// A command is inserted before its request is sent and removed exactly once:
/// by the matching response, by a send failure, or by [`PendingTable::drain`]
/// on connection loss.
pub struct PendingTable {
    entries: RwLock<HashMap<CommandId, Box<dyn Pending>>>,
    capacity: usize,
}

impl PendingTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    pub fn contains(&self, id: CommandId) -> bool {
        self.entries.read().expect("lock poisoned").contains_key(&id)
    }

    /// Register a command. Hands it back when the table is full or the
    /// identifier is already pending.
    pub fn insert(&self, pending: Box<dyn Pending>) -> Result<(), Box<dyn Pending>> {
        let mut entries = self.entries.write().expect("lock poisoned");
        if entries.len() >= self.capacity || entries.contains_key(&pending.id()) {
            return Err(pending);
        }
        entries.insert(pending.id(), pending);
        Ok(())
    }

    pub fn remove(&self, id: CommandId) -> Option<Box<dyn Pending>> {
        self.entries.write().expect("lock poisoned").remove(&id)
    }

    /// Remove every pending command, oldest identifier first.
    pub fn drain(&self) -> Vec<Box<dyn Pending>> {
        let mut drained: Vec<_> = self
            .entries
            .write()
            .expect("lock poisoned")
            .drain()
            .map(|(_, pending)| pending)
            .collect();
        drained.sort_by_key(|pending| pending.id());
        drained
    }

    /// Identifiers currently pending, sorted.
    pub fn ids(&self) -> Vec<CommandId> {
        let entries = self.entries.read().expect("lock poisoned");
        let mut ids: Vec<CommandId> = entries.keys().copied().collect();
        ids.sort();
        ids
    }
}
