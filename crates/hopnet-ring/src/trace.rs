//! Lookup path recording

use hopnet_core::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered record of the node ids visited during a single lookup.
///
/// Each hop appends exactly one id. A bounded lookup never revisits a node,
/// so a well-formed trace has no duplicates and is at most ring-size long.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTrace {
    visited: Vec<NodeId>,
}

impl LookupTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, id: NodeId) {
        self.visited.push(id);
    }

    /// Number of nodes visited, the start node included.
    pub fn hops(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.visited
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.visited.iter().copied()
    }
}

impl fmt::Display for LookupTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.visited.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut trace = LookupTrace::new();
        trace.record(5);
        trace.record(6);
        trace.record(0);

        assert_eq!(trace.hops(), 3);
        assert_eq!(trace.as_slice(), &[5, 6, 0]);
    }

    #[test]
    fn test_display() {
        let mut trace = LookupTrace::new();
        trace.record(0);
        trace.record(1);
        trace.record(2);
        assert_eq!(trace.to_string(), "0 -> 1 -> 2");
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(LookupTrace::new().to_string(), "");
        assert!(LookupTrace::new().is_empty());
    }
}
