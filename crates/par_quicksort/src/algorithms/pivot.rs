use std::cmp::Ordering;

use crate::TUNED_PARAMS;

/// Index of the median of `v[a]`, `v[b]` and `v[c]`.
///
/// Ties resolve to a fixed index so that pivot choice is deterministic for a
/// given input.
#[inline]
pub fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let gt = |x: usize, y: usize| compare(&v[x], &v[y]) == Ordering::Greater;

    if gt(a, b) {
        if gt(b, c) {
            b
        } else if gt(a, c) {
            c
        } else {
            a
        }
    } else if gt(a, c) {
        a
    } else if gt(b, c) {
        c
    } else {
        b
    }
}

#[inline]
pub fn choose_pivot_median3<T, F>(v: &[T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = v.len();
    median3(v, 0, len / 2, len - 1, compare)
}

/// Tukey's ninther: median of three medians-of-three spread over the slice.
#[inline]
pub fn choose_pivot_ninther<T, F>(v: &[T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = v.len();
    let end = len - 1;
    let eps = len / 8;
    let mid = len / 2;

    let m1 = median3(v, 0, eps, eps * 2, compare);
    let m2 = median3(v, mid - 1, mid, mid + 1, compare);
    let m3 = median3(v, end - eps * 2, end - eps, end, compare);
    median3(v, m1, m2, m3, compare)
}

/// Picks a pivot index for a slice longer than the insertion threshold.
#[inline]
pub fn choose_pivot<T, F>(v: &[T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    debug_assert!(v.len() > TUNED_PARAMS.insertion_threshold);

    if v.len() <= TUNED_PARAMS.ninther_threshold {
        choose_pivot_median3(v, compare)
    } else {
        choose_pivot_ninther(v, compare)
    }
}
