use std::fmt;

use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f1c_3a7e_92d4_b081;

/// Stable 128-bit hash of a DOT source text.
///
/// Two renders with equal fingerprints handed the engine byte-identical input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for SourceFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint DOT source bytes.
pub fn fingerprint_source(source: &str) -> SourceFingerprint {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(source.as_bytes());
    let v = h.digest128();
    SourceFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dot/fingerprint.rs"]
mod tests;
