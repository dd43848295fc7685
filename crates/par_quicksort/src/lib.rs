mod algorithms;
mod error;
mod pool;
mod range;

use std::cmp::Ordering;

pub use algorithms::bubble_sort::{bubble_sort, bubble_sort_range};
pub use error::SortError;
pub use pool::{PoolConfig, TaskPool, configure_global_pool, global_pool, shutdown_global_pool};
pub use range::check_range;

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges up to this length are insertion sorted instead of partitioned.
    pub insertion_threshold: usize,
    /// Ranges up to this length pick the pivot by median-of-three, longer
    /// ranges by ninther.
    pub ninther_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 7,
    ninther_threshold: 40,
};

/// Sorts `data` in ascending order on the global task pool.
pub fn sort<T>(data: &mut [T])
where
    T: Ord + Send,
{
    global_pool().sort(data);
}

/// Sorts the inclusive range `start..=end` of `data`; elements outside it are
/// left untouched. Fails without modifying `data` if the range is invalid.
pub fn sort_range<T>(data: &mut [T], start: usize, end: usize) -> Result<(), SortError>
where
    T: Ord + Send,
{
    global_pool().sort_range(data, start, end)
}

/// Sorts `data` with `compare` as the ordering. The comparator may run on
/// several threads at once.
pub fn sort_by<T, F>(data: &mut [T], compare: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    global_pool().sort_by(data, compare);
}

pub fn sort_range_by<T, F>(
    data: &mut [T],
    start: usize,
    end: usize,
    compare: F,
) -> Result<(), SortError>
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    global_pool().sort_range_by(data, start, end, compare)
}

pub fn sort_by_key<T, K, F>(data: &mut [T], key: F)
where
    T: Send,
    K: Ord,
    F: Fn(&T) -> K + Sync,
{
    global_pool().sort_by_key(data, key);
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[u64]) {
        let mut actual = data.to_vec();
        sort(&mut actual);

        let mut expected = data.to_vec();
        expected.sort_unstable();

        assert_eq!(actual, expected, "input_len={}", data.len());
    }

    #[test]
    fn tuned_params_match_crossovers() {
        assert_eq!(TUNED_PARAMS.insertion_threshold, 7);
        assert_eq!(TUNED_PARAMS.ninther_threshold, 40);
    }

    #[test]
    fn sorts_nine_distinct() {
        let mut v = vec![5, 3, 8, 1, 9, 2, 7, 4, 6];
        sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: Vec<i32> = Vec::new();
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        sort(&mut one);
        assert_eq!(one, vec![42]);
        sort_range(&mut one, 0, 0).unwrap();
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn sorts_pair_range() {
        let mut v = vec![2, 1];
        sort_range(&mut v, 0, 1).unwrap();
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn all_equal_unchanged() {
        let mut v = vec![1, 1, 1, 1, 1];
        sort(&mut v);
        assert_eq!(v, vec![1, 1, 1, 1, 1]);

        let mut v = vec![7_u8; 100_000];
        sort(&mut v);
        assert!(v.iter().all(|&x| x == 7));
        assert_eq!(v.len(), 100_000);
    }

    #[test]
    fn sub_range_is_confined() {
        let original: Vec<i32> = (1..=100).rev().collect();
        let mut v = original.clone();
        sort_range(&mut v, 10, 20).unwrap();

        assert_eq!(v[..10], original[..10]);
        assert_eq!(v[21..], original[21..]);

        let mut expected = original[10..=20].to_vec();
        expected.sort_unstable();
        assert_eq!(v[10..=20], expected[..]);
    }

    #[test]
    fn invalid_range_leaves_data_untouched() {
        let mut v = vec![9, 4, 7, 1, 3];
        assert!(matches!(
            sort_range(&mut v, 3, 1),
            Err(SortError::InvalidRange { start: 3, end: 1 })
        ));
        assert!(matches!(
            sort_range(&mut v, 5, 3),
            Err(SortError::InvalidRange { start: 5, end: 3 })
        ));
        assert!(matches!(
            sort_range(&mut v, 0, 5),
            Err(SortError::IndexOutOfBounds { index: 5, len: 5 })
        ));
        assert!(matches!(
            sort_range_by(&mut v, 2, 9, |a: &i32, b: &i32| a.cmp(b)),
            Err(SortError::IndexOutOfBounds { index: 9, len: 5 })
        ));
        assert_eq!(v, vec![9, 4, 7, 1, 3]);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
            (0..41).collect(),
            (0..41).rev().collect(),
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 7, 8, 31, 40, 41, 64, 127, 511, 2048, 100_000] {
            let data: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096, 65_536] {
            let data: Vec<u64> = (0..size).map(|_| (rng.random::<u64>() % 16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn structured_patterns() {
        let size = 10_000_u64;
        let ascending: Vec<u64> = (0..size).collect();
        let descending: Vec<u64> = (0..size).rev().collect();
        let saw: Vec<u64> = (0..size).map(|i| i % 97).collect();
        let pipe_organ: Vec<u64> = (0..size).map(|i| i.min(size - i)).collect();

        for data in [ascending, descending, saw, pipe_organ] {
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x1D_2026);
        let mut v: Vec<i32> = (0..5_000).map(|_| rng.random_range(-500..500)).collect();
        sort(&mut v);
        let once = v.clone();
        sort(&mut v);
        assert_eq!(v, once);

        sort_range(&mut v, 100, 4_000).unwrap();
        assert_eq!(v, once);
    }

    #[test]
    fn comparator_orders_descending() {
        let mut v: Vec<i32> = (0..1_000).collect();
        sort_by(&mut v, |a, b| b.cmp(a));
        let expected: Vec<i32> = (0..1_000).rev().collect();
        assert_eq!(v, expected);
    }

    struct Measurement {
        sensor: String,
        reading: f64,
    }

    #[test]
    fn comparator_sorts_user_types() {
        let mut rng = StdRng::seed_from_u64(0xF10A7);
        let mut v: Vec<Measurement> = (0..3_000)
            .map(|i| Measurement {
                sensor: format!("s{}", i % 13),
                reading: rng.random_range(-1.0..1.0),
            })
            .collect();

        sort_by(&mut v, |a, b| a.reading.total_cmp(&b.reading));
        assert!(v.is_sorted_by(|a, b| a.reading <= b.reading));
        assert_eq!(v.len(), 3_000);

        sort_by_key(&mut v, |m| m.sensor.clone());
        assert!(v.is_sorted_by(|a, b| a.sensor <= b.sensor));
    }

    #[test]
    fn comparator_sub_range() {
        let mut v = vec![1, 9, 8, 7, 6, 5, 4, 3, 2, 0];
        sort_range_by(&mut v, 1, 8, |a: &i32, b: &i32| a.cmp(b)).unwrap();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
    }

    #[test]
    fn comparator_panic_reaches_caller() {
        let mut v: Vec<u32> = (0..50_000).rev().collect();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            sort_by(&mut v, |a, b| {
                if *a == 12_345 || *b == 12_345 {
                    panic!("comparator failed");
                }
                a.cmp(b)
            });
        }));
        assert!(result.is_err());

        // Still a permutation of the input.
        v.sort_unstable();
        assert!(v.iter().copied().eq(0..50_000));
    }

    #[test]
    fn concurrent_sorts_share_the_pool() {
        thread::scope(|s| {
            for t in 0..4_u64 {
                s.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(0xC0C0 + t);
                    let data: Vec<u64> = (0..20_000).map(|_| rng.random::<u64>()).collect();
                    assert_sorts_like_std(&data);
                });
            }
        });
    }
}
