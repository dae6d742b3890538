use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Sample size and timing for a benchmark group, picked by input size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeProfile {
    Small,
    Medium,
    Large,
}

impl RuntimeProfile {
    pub fn for_size(size: usize) -> Self {
        if size <= 4_096 {
            Self::Small
        } else if size <= 16_384 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn settings(self) -> (usize, u64, u64) {
        // (sample size, warm-up ms, measurement ms)
        match self {
            Self::Small => (15, 100, 200),
            Self::Medium => (15, 500, 1000),
            Self::Large => (10, 800, 1500),
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        let (samples, warm_up_ms, measure_ms) = self.settings();
        group.sample_size(samples);
        group.warm_up_time(Duration::from_millis(warm_up_ms));
        group.measurement_time(Duration::from_millis(measure_ms));
    }
}

pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    RuntimeProfile::for_size(size).apply(group);
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_keys<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// `q` inclusive ranges `(l, r)` with `l <= r < n`.
pub fn random_ranges<R: Rng + ?Sized>(rng: &mut R, n: usize, q: usize) -> Vec<(usize, usize)> {
    assert!(n > 0);
    (0..q)
        .map(|_| {
            let l = rng.random_range(0..n);
            let r = rng.random_range(l..n);
            (l, r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{RuntimeProfile, default_rng, random_keys, random_ranges};

    #[test]
    fn profiles_follow_size_thresholds() {
        assert_eq!(RuntimeProfile::for_size(1_024), RuntimeProfile::Small);
        assert_eq!(RuntimeProfile::for_size(4_096), RuntimeProfile::Small);
        assert_eq!(RuntimeProfile::for_size(16_384), RuntimeProfile::Medium);
        assert_eq!(RuntimeProfile::for_size(65_536), RuntimeProfile::Large);
    }

    #[test]
    fn generated_ranges_are_inclusive_and_in_bounds() {
        let mut rng = default_rng();
        let keys = random_keys(&mut rng, 100, -5..=5);
        assert_eq!(keys.len(), 100);
        assert!(keys.iter().all(|k| (-5..=5).contains(k)));
        for (l, r) in random_ranges(&mut rng, 17, 1_000) {
            assert!(l <= r && r < 17);
        }
    }
}
