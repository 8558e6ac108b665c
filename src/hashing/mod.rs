//! Deterministic hashing for lexical bucket assignment.
//!
//! Bucket assignment is part of the scoring contract: the same trigram must land
//! in the same bucket on every machine, process and release, or evidence-alignment
//! scores stop being reproducible. BLAKE3 gives us that; `std`'s `DefaultHasher`
//! does not (it is randomly keyed per process).

use crate::constants::HASH_CONTRACT_VERSION;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// # Truncation
///
/// Only the first 8 bytes (little-endian) are kept. The value is reduced modulo a
/// small bucket count afterwards, so the extra entropy would be discarded anyway.
///
/// # Stability
///
/// The output of this function is pinned by golden tests. Any change to it must
/// bump [`HASH_CONTRACT_VERSION`].
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Maps a character n-gram to a bucket in `[0, dims)`.
///
/// # Panics
///
/// Panics if `dims` is zero.
#[inline]
pub fn bucket_for(gram: &str, dims: usize) -> usize {
    assert!(dims > 0, "bucket count must be non-zero");
    (hash_to_u64(gram.as_bytes()) % dims as u64) as usize
}

/// Returns the version of the bucket-assignment contract implemented here.
#[inline]
pub fn hash_contract_version() -> u32 {
    HASH_CONTRACT_VERSION
}
