//! Deterministic random number generation.
//!
//! RULE: Nothing in the machine may call a platform RNG.
//! All randomness flows through SlotRng streams derived from the single
//! master seed handed to the session.
//!
//! Each consumer gets its own stream, seeded from
//! (master_seed XOR mixed stream index). Drawing more spins therefore never
//! perturbs how reels are built, and vice versa.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream.
pub struct SlotRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SlotRng {
    /// Create a stream from the master seed and a stable stream index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Uniform index in [0, n). Unbiased (rejection sampling inside rand).
    pub fn index_below(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// In-place Fisher-Yates: walk `j` from the last index down to 1 and
    /// swap with a uniform index in [0, j].
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for j in (1..items.len()).rev() {
            let k = self.index_below(j + 1);
            items.swap(j, k);
        }
    }
}

/// Hands out the per-consumer streams for one session.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stream(&self, slot: StreamSlot) -> SlotRng {
        SlotRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries; only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Reels = 0,
    Spins = 1,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reels => "reels",
            Self::Spins => "spins",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let bank_a = RngBank::new(12345);
        let bank_b = RngBank::new(12345);
        let mut a = bank_a.for_stream(StreamSlot::Spins);
        let mut b = bank_b.for_stream(StreamSlot::Spins);

        for _ in 0..100 {
            assert_eq!(a.index_below(20), b.index_below(20));
        }
    }

    #[test]
    fn streams_are_independent() {
        let bank = RngBank::new(12345);
        let mut reels = bank.for_stream(StreamSlot::Reels);
        let mut spins = bank.for_stream(StreamSlot::Spins);

        let a: Vec<u64> = (0..16).map(|_| reels.index_below(1_000_000) as u64).collect();
        let b: Vec<u64> = (0..16).map(|_| spins.index_below(1_000_000) as u64).collect();
        assert_ne!(a, b, "Reels and spins streams should not coincide");
        assert_eq!(reels.name, "reels");
    }

    #[test]
    fn index_below_stays_in_range() {
        let mut rng = SlotRng::new(7, 0);
        for n in 1..50 {
            for _ in 0..20 {
                assert!(rng.index_below(n) < n);
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SlotRng::new(99, 0);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = SlotRng::new(1, 0);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        let mut one = vec![42];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![42]);
    }
}
