//! Thread-safe random byte source
//!
//! A single [`RandomSource`] may be shared by many signers. Every draw holds
//! the lock for its whole length, so concurrent callers never receive
//! interleaved byte sequences.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

static PROCESS_SOURCE: Lazy<Arc<RandomSource>> = Lazy::new(|| Arc::new(RandomSource::new()));

/// Cryptographically secure random bytes behind an explicit mutex
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    /// Create a source seeded from the operating system
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Create a deterministic source for reproducible tests
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// The process-wide source used when none is injected
    pub fn shared() -> Arc<RandomSource> {
        Arc::clone(&PROCESS_SOURCE)
    }

    /// Fill `dest` with random bytes in a single locked draw
    pub fn fill(&self, dest: &mut [u8]) {
        let mut rng = self.rng.lock();
        rng.fill_bytes(dest);
    }

    /// Draw `len` random bytes
    pub fn bytes(&self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf);
        buf
    }

    /// Draw a random 32-bit value
    pub fn next_u32(&self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill(&mut buf);
        u32::from_le_bytes(buf)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = RandomSource::from_seed(42);
        let b = RandomSource::from_seed(42);
        assert_eq!(a.bytes(32), b.bytes(32));
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn shared_returns_the_same_instance() {
        assert!(Arc::ptr_eq(&RandomSource::shared(), &RandomSource::shared()));
    }

    #[test]
    fn concurrent_draws_do_not_repeat() {
        let source = Arc::new(RandomSource::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let source = Arc::clone(&source);
                thread::spawn(move || (0..50).map(|_| source.bytes(16)).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for draw in handle.join().unwrap() {
                assert_eq!(draw.len(), 16);
                assert!(seen.insert(draw));
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
