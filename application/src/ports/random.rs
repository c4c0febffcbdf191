//! Random source port
//!
//! Shuffle order and question-id suffixes depend on randomness; injecting
//! the source keeps both reproducible under a seeded implementation.
//! Production wiring uses a real entropy source from the infrastructure
//! layer.

/// Source of randomness
pub trait RandomSource: Send + Sync {
    fn next_u64(&self) -> u64;
}

/// Uniform in-place shuffle (Fisher–Yates) driven by a [`RandomSource`].
///
/// A fixed-seed source yields a fixed permutation, which regression tests
/// rely on.
pub fn shuffle<T>(random: &dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = (random.next_u64() % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}
