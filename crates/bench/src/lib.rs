use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_UNIQUE_KEYS: u64 = 16;
const SAW_RUN_LEN: usize = 128;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime preset by input size.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= 16_384 {
        apply_small_runtime_config(group);
    } else if size <= 262_144 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes for sort benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    Random,
    FewUnique,
    Ascending,
    Descending,
    NearlySorted,
    Saw,
    AllEqual,
}

pub const ALL_PATTERNS: [Pattern; 7] = [
    Pattern::Random,
    Pattern::FewUnique,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::NearlySorted,
    Pattern::Saw,
    Pattern::AllEqual,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::FewUnique => "few_unique",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearlySorted => "nearly_sorted_1pct_swaps",
            Self::Saw => "saw",
            Self::AllEqual => "all_equal",
        }
    }

    pub fn generate(self, size: usize, rng: &mut StdRng) -> Vec<u64> {
        match self {
            Self::Random => (0..size).map(|_| rng.random::<u64>()).collect(),
            Self::FewUnique => (0..size)
                .map(|_| rng.random_range(0..FEW_UNIQUE_KEYS))
                .collect(),
            Self::Ascending => (0..size as u64).collect(),
            Self::Descending => (0..size as u64).rev().collect(),
            Self::NearlySorted => {
                let mut data: Vec<u64> = (0..size as u64).collect();
                if size > 0 {
                    for _ in 0..(size / 100).max(1) {
                        let a = rng.random_range(0..size);
                        let b = rng.random_range(0..size);
                        data.swap(a, b);
                    }
                }
                data
            }
            Self::Saw => (0..size).map(|i| (i % SAW_RUN_LEN) as u64).collect(),
            Self::AllEqual => vec![FEW_UNIQUE_KEYS; size],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_have_requested_size() {
        let mut rng = default_rng();
        for pattern in ALL_PATTERNS {
            for size in [0, 1, 100, 1000] {
                assert_eq!(pattern.generate(size, &mut rng).len(), size, "{pattern:?}");
            }
        }
    }

    #[test]
    fn pattern_shapes() {
        let mut rng = default_rng();
        assert!(Pattern::Ascending.generate(500, &mut rng).is_sorted());

        let desc = Pattern::Descending.generate(500, &mut rng);
        assert!(desc.windows(2).all(|w| w[0] > w[1]));

        let few = Pattern::FewUnique.generate(500, &mut rng);
        assert!(few.iter().all(|&x| x < FEW_UNIQUE_KEYS));

        let equal = Pattern::AllEqual.generate(500, &mut rng);
        assert!(equal.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = ALL_PATTERNS.iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL_PATTERNS.len());
    }
}
