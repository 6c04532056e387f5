//! Seed digest canonicalization
//!
//! A seed's identity is the SHA256 of its canonical JSON rendering. Row maps
//! are BTreeMaps, so key order in the source YAML does not affect the digest.

use crate::seed::format::SeedV0;
use sha2::{Digest, Sha256};

/// Compute the canonical digest of a seed
pub fn compute_seed_digest(seed: &SeedV0) -> String {
    let canonical =
        serde_json::to_string(seed).expect("seed serialization to JSON is infallible");
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
