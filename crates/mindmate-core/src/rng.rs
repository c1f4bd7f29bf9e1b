//! Small seeded random number generator for scripted responses and prompts.

/// Generate a seed for a new generator.
/// Uses a counter + hash approach that works on all platforms including WASM.
pub fn generate_seed() -> u32 {
    use std::sync::atomic::{AtomicU32, Ordering};

    static SEED_COUNTER: AtomicU32 = AtomicU32::new(1);

    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    // splitmix32-like mixing
    let mut x = counter.wrapping_mul(0x9E3779B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^= x >> 16;
    x
}

/// Seeded xorshift32 generator. Equal seeds yield equal sequences.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Generator with a fresh seed from [`generate_seed`].
    pub fn from_entropy() -> Self {
        Self::new(generate_seed())
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random index in `0..len`, or `None` when `len` is zero.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some((self.next_u32() as usize) % len)
    }

    /// Pick a random element of `items`.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let index = self.next_index(items.len())?;
        items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_index_empty_range() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(rng.next_index(0), None);
        for _ in 0..32 {
            assert!(rng.next_index(5).is_some_and(|i| i < 5));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = SimpleRng::new(7);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());

        let items = [1, 2, 3];
        for _ in 0..32 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }

    #[test]
    fn test_generated_seeds_differ() {
        assert_ne!(generate_seed(), generate_seed());
    }
}
