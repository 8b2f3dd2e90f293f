//! Content identifier hashing

use crate::types::KeySlot;

/// Map a content identifier into the ring's key space.
///
/// The identifier is digested with BLAKE3 and the full 256-bit digest is
/// reduced modulo `ring_size`, so slots are close to uniformly distributed
/// for arbitrary string inputs. The mapping is deterministic: the same
/// identifier and ring size always yield the same slot.
///
/// Distinct identifiers may share a slot; callers resolve collisions
/// (the ring's local stores overwrite, most recent placement wins).
///
/// `ring_size` must be at least 1; the network enforces this at build time.
pub fn key_slot(identifier: &str, ring_size: usize) -> KeySlot {
    debug_assert!(ring_size > 0, "ring size must be at least 1");

    let digest = blake3::hash(identifier.as_bytes());

    // Horner reduction of the digest as a big-endian integer, equivalent to
    // taking the whole 256-bit value modulo ring_size. rem stays below
    // 2^64 so the shift cannot overflow a u128.
    let modulus = ring_size as u128;
    let mut rem: u128 = 0;
    for byte in digest.as_bytes() {
        rem = ((rem << 8) | *byte as u128) % modulus;
    }

    rem as KeySlot
}
