use crate::domain::ports::RandomProvider;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomProvider for StdRandom {
    fn random_ratio(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_stay_in_unit_interval() {
        let mut random = StdRandom::from_entropy();
        for _ in 0..1_000 {
            let ratio = random.random_ratio();
            assert!((0.0..1.0).contains(&ratio));
        }
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::from_seed(Some(42));
        for _ in 0..10 {
            assert_eq!(a.random_ratio(), b.random_ratio());
        }
    }
}
