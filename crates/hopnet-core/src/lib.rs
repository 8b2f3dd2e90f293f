//! Hopnet Core - shared types and key hashing
//!
//! This crate provides the fundamental building blocks for the hopnet
//! structured P2P lookup simulator: the node/key identifier types and the
//! deterministic hash that maps content identifiers into the ring's key space.

pub mod hash;
pub mod types;

pub use hash::key_slot;
pub use types::{KeySlot, NodeId};
