//! A single peer in the ring

use hopnet_core::{KeySlot, NodeId};
use std::collections::HashMap;

/// A peer holding a local hash-keyed content store and one successor link.
///
/// The successor is an index into the owning network's node arena, never a
/// reference to another node; the network resolves it at traversal time.
/// Ids and successor links are fixed once the ring is built, only the store
/// contents change afterwards.
#[derive(Debug, Clone)]
pub struct RingNode {
    id: NodeId,
    successor: NodeId,
    store: HashMap<KeySlot, String>,
}

impl RingNode {
    pub(crate) fn new(id: NodeId, successor: NodeId) -> Self {
        Self {
            id,
            successor,
            store: HashMap::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The next node in the ring (itself in a one-node ring).
    pub fn successor(&self) -> NodeId {
        self.successor
    }

    /// Store an identifier under its key slot, overwriting any previous
    /// occupant. Returns the identifier that was displaced, if the slot was
    /// held by a different one.
    pub(crate) fn place(&mut self, slot: KeySlot, identifier: &str) -> Option<String> {
        self.store
            .insert(slot, identifier.to_string())
            .filter(|previous| previous.as_str() != identifier)
    }

    /// Whether this node stores content under the given slot.
    pub fn holds(&self, slot: KeySlot) -> bool {
        self.store.contains_key(&slot)
    }

    /// The identifier currently stored under a slot, if any.
    pub fn stored(&self, slot: KeySlot) -> Option<&str> {
        self.store.get(&slot).map(String::as_str)
    }

    /// Number of occupied slots in the local store.
    pub fn store_len(&self) -> usize {
        self.store.len()
    }
}
