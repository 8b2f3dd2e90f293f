//! Ring construction and successor-chain lookups

use crate::node::RingNode;
use crate::trace::LookupTrace;
use crate::{Result, RingError};
use hopnet_core::{key_slot, NodeId};
use serde::{Deserialize, Serialize};

/// Outcome of a single lookup: the owning node, if one was reached before
/// the hop budget ran out, plus the full path taken. A miss still carries
/// the complete trace so callers can audit the traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    pub found: Option<NodeId>,
    pub trace: LookupTrace,
}

/// A fixed ring of nodes with caller-directed placement and successor-chain
/// lookups.
///
/// The network owns every node; successor links are plain indexes into the
/// node arena, wired once at build time into a single cycle covering all
/// nodes. Placement requires exclusive access, lookups are shared reads, so
/// the borrow checker enforces the build-then-query phasing the model
/// assumes.
pub struct RingNetwork {
    nodes: Vec<RingNode>,
}

impl RingNetwork {
    /// Build a ring of `size` nodes with ids `0..size`, each pointing at
    /// `(id + 1) % size`. A one-node ring points at itself.
    pub fn build(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(RingError::InvalidConfiguration);
        }

        let nodes = (0..size)
            .map(|id| RingNode::new(id, (id + 1) % size))
            .collect();

        tracing::debug!(size, "ring built");
        Ok(Self { nodes })
    }

    /// Number of nodes in the ring.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only view of the nodes in id order, for presentation layers that
    /// render the topology.
    pub fn nodes(&self) -> &[RingNode] {
        &self.nodes
    }

    /// The successor of a node.
    pub fn successor_of(&self, id: NodeId) -> Result<NodeId> {
        Ok(self.node(id)?.successor())
    }

    fn node(&self, id: NodeId) -> Result<&RingNode> {
        self.nodes.get(id).ok_or(RingError::OutOfRange {
            id,
            size: self.nodes.len(),
        })
    }

    /// Place content on a specific node.
    ///
    /// Placement is caller-directed: the identifier is stored on `node_id`
    /// under its hash slot, regardless of where the slot value itself might
    /// point. A collision on the slot overwrites the previous identifier.
    pub fn place_on(&mut self, node_id: NodeId, identifier: &str) -> Result<()> {
        let size = self.nodes.len();
        let node = self
            .nodes
            .get_mut(node_id)
            .ok_or(RingError::OutOfRange { id: node_id, size })?;

        let slot = key_slot(identifier, size);
        match node.place(slot, identifier) {
            Some(displaced) => tracing::debug!(
                node = node_id,
                slot,
                identifier,
                displaced = %displaced,
                "slot collision, previous identifier overwritten"
            ),
            None => tracing::debug!(node = node_id, slot, identifier, "content placed"),
        }

        Ok(())
    }

    /// Locate content starting from `start_id`, following successor links.
    ///
    /// The start node is checked first, then the query is forwarded hop by
    /// hop with a budget of `size - 1` further hops, so a full traversal
    /// visits every node exactly once before the search is declared
    /// exhausted. A miss is a normal outcome, not an error. Node content is
    /// never mutated.
    pub fn locate(&self, start_id: NodeId, identifier: &str) -> Result<Lookup> {
        // Validate before the trace records anything
        self.node(start_id)?;

        let slot = key_slot(identifier, self.nodes.len());
        let mut trace = LookupTrace::new();
        let mut current = start_id;
        let mut hops_remaining = self.nodes.len() - 1;

        loop {
            trace.record(current);

            if self.nodes[current].holds(slot) {
                tracing::debug!(identifier, slot, node = current, hops = trace.hops(), "lookup hit");
                return Ok(Lookup {
                    found: Some(current),
                    trace,
                });
            }

            if hops_remaining == 0 {
                tracing::debug!(identifier, slot, hops = trace.hops(), "lookup exhausted the ring");
                return Ok(Lookup { found: None, trace });
            }

            tracing::trace!(node = current, hops_remaining, "local miss, forwarding to successor");
            current = self.nodes[current].successor();
            hops_remaining -= 1;
        }
    }
}
