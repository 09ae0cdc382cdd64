use serde::{Deserialize, Serialize};

/// Deterministic random stream for one turn of battle resolution.
///
/// Every probabilistic decision in the engine draws from this stream in a
/// fixed, documented order, so that the same seed always reproduces the
/// same turn on any machine. The generator is PCG-XSH-RR over 64-bit
/// state: a single wrapping multiply-add step followed by an
/// xorshift-and-rotate output permutation. Only fixed-width integer
/// arithmetic feeds back into the state; floating point is used strictly
/// on the output side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRng {
    state: u64,
}

impl TurnRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Construct a stream from a numeric seed.
    ///
    /// The raw seed is avalanched once so that small seeds (0, 1, 2, ...)
    /// do not produce correlated opening draws.
    pub fn new(seed: u64) -> Self {
        let mut state = seed ^ Self::INCREMENT;
        state ^= state >> 33;
        state = state.wrapping_mul(0xff51afd7ed558ccd);
        state ^= state >> 33;
        Self { state }
    }

    /// Construct a stream from a string seed, e.g. a battle id.
    pub fn from_str_seed(seed: &str) -> Self {
        Self::new(seed_from_str(seed))
    }

    /// Construct a stream from OS entropy. The stream itself is still
    /// deterministic; only the seed selection is random. Callers that need
    /// replay must record the seed they pass to [`TurnRng::new`] instead.
    pub fn from_entropy() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Self::new(rng.random::<u64>())
    }

    /// Advance the state by one LCG step:
    /// `state' = (state * multiplier + increment) mod 2^64`.
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// PCG output permutation (xorshift high, random rotate).
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Next raw 32-bit draw.
    pub fn next_u32(&mut self) -> u32 {
        self.step();
        Self::output(self.state)
    }

    /// Uniform draw in `[0, 1)`. Exact: a 32-bit integer divided by 2^32
    /// is representable without rounding in an f64.
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4294967296.0
    }

    /// Integer draw in `[min, max]` inclusive.
    pub fn range_int(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32() % span)
    }

    /// Bernoulli draw with `P(true) = p`. Values outside `[0, 1]` clamp to
    /// never/always without consuming precision they do not need; the draw
    /// itself is always consumed so call sites keep a stable stream shape.
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range_int(0, (items.len() - 1) as u32) as usize;
        items.get(index)
    }

    /// Fisher-Yates shuffle, back to front.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        for i in (1..items.len()).rev() {
            let j = self.range_int(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// Fold a string into a 64-bit seed (FNV-1a), so callers can seed a
/// stream from a battle id without shipping a second hashing dependency.
pub fn seed_from_str(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(1099511628211);
    }
    hash
}
