// ---------------------------------------------------------------------------
// Deterministic sampling for the "sample vs. full data" comparison
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**).
pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `0..bound`.
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Draw `k` distinct indices from `0..n` without replacement
/// (partial Fisher-Yates shuffle).  Returned indices are sorted so the
/// sample preserves the series' time order.
pub fn random_indices(n: usize, k: usize, rng: &mut SimpleRng) -> Vec<usize> {
    let k = k.min(n);
    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = i + rng.next_below(n - i);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool.sort_unstable();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_size_and_bounds() {
        let mut rng = SimpleRng::new(42);
        let idx = random_indices(100, 30, &mut rng);
        assert_eq!(idx.len(), 30);
        assert!(idx.iter().all(|&i| i < 100));
    }

    #[test]
    fn sample_has_no_duplicates() {
        let mut rng = SimpleRng::new(7);
        let mut idx = random_indices(50, 50, &mut rng);
        idx.dedup();
        assert_eq!(idx.len(), 50);
    }

    #[test]
    fn sample_is_deterministic_per_seed() {
        let a = random_indices(80, 20, &mut SimpleRng::new(1));
        let b = random_indices(80, 20, &mut SimpleRng::new(1));
        let c = random_indices(80, 20, &mut SimpleRng::new(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn oversized_request_is_clamped() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(random_indices(5, 10, &mut rng).len(), 5);
    }
}
