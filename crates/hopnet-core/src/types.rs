//! Core identifier types for hopnet

/// Identifier of a peer in the ring, in `[0, ring_size)`.
///
/// Ids are assigned densely at ring construction and double as indexes into
/// the network's node arena.
pub type NodeId = usize;

/// Hash-derived slot for a content identifier, in `[0, ring_size)`.
///
/// Key slots and node ids share the same space, but a slot says nothing about
/// which node stores the content: placement is caller-directed.
pub type KeySlot = usize;
