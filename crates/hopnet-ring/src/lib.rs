//! Hopnet Ring - structured lookup over a fixed successor ring
//!
//! This crate models the lookup core of a structured P2P network: a fixed
//! set of nodes wired into a single cycle, each holding a hash-keyed local
//! store and one successor link. Queries start at an arbitrary node and are
//! forwarded along successor links, bounded by a hop budget, until the
//! owning node is found or the whole ring has been visited.

pub mod network;
pub mod node;
pub mod trace;

pub use network::{Lookup, RingNetwork};
pub use node::RingNode;
pub use trace::LookupTrace;

use hopnet_core::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("ring size must be at least 1")]
    InvalidConfiguration,

    #[error("node id {id} out of range for a ring of {size} nodes")]
    OutOfRange { id: NodeId, size: usize },
}

pub type Result<T> = std::result::Result<T, RingError>;
