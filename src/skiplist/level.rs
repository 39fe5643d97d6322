use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default maximum height of a skip list.
///
/// Suitable for roughly e^18 (~6.6e7) entries while keeping expected
/// O(log n) operations.
pub const DEFAULT_MAX_LEVEL: usize = 18;

/// Default probability that an entry present at one level is also promoted
/// to the next.
pub const DEFAULT_PROBABILITY: f64 = 1.0 / std::f64::consts::E;

/// Assigns a random height to each newly inserted entry.
///
/// Heights follow a geometric distribution: every level beyond the first is
/// granted independently with the configured probability. The per-level
/// thresholds are precomputed (`table[i] = probability^i`) so a draw costs
/// one uniform sample plus a short scan.
#[derive(Debug)]
pub(crate) struct LevelGenerator {
    max_level: usize,
    probability: f64,
    table: Vec<f64>,
    rng: StdRng,
}

impl LevelGenerator {
    /// `max_level` must already be validated by the caller.
    pub fn new(max_level: usize, probability: f64) -> Self {
        Self::with_rng(max_level, probability, StdRng::from_entropy())
    }

    /// Like [`LevelGenerator::new`] but with a fixed seed, so height draws
    /// are reproducible.
    pub fn with_seed(max_level: usize, probability: f64, seed: u64) -> Self {
        Self::with_rng(max_level, probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(max_level: usize, probability: f64, rng: StdRng) -> Self {
        LevelGenerator {
            max_level,
            probability,
            table: probability_table(probability, max_level),
            rng,
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Changes the promotion probability used by future draws. Heights
    /// already handed out are unaffected.
    pub fn set_probability(&mut self, probability: f64) {
        self.probability = probability;
        self.table = probability_table(probability, self.max_level);
    }

    /// Draws a height in `[1, max_level]`.
    pub fn random_level(&mut self) -> usize {
        let r: f64 = self.rng.gen_range(0.0..1.0);

        let mut level = 1;
        while level < self.max_level && r < self.table[level] {
            level += 1;
        }
        level
    }
}

/// Precomputes the chance of a new entry reaching each level: `table[i]` is
/// the probability of `i` consecutive promotions.
fn probability_table(probability: f64, max_level: usize) -> Vec<f64> {
    (0..max_level).map(|i| probability.powi(i as i32)).collect()
}
