//! Seeded random-sequence helper, xoshiro256**-based so failures reproduce
//! from the seed alone.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

pub struct Fuzzer {
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// A random integer in `[min, max]`.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    pub fn ints(&mut self, count: usize, min: i32, max: i32) -> Vec<i32> {
        (0..count).map(|_| self.int(min, max)).collect()
    }

    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /// `true` with the given probability.
    pub fn bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }
}
