use std::cmp::Ordering;

/// Insertion sort for short slices.
///
/// The first pass carries the minimum down to `v[0]`, where it serves as a
/// sentinel that ends every leftward scan of the second pass. The second pass
/// shifts larger elements right by one instead of swapping pairwise.
pub fn insertion_sort_sentinel<T, F>(v: &mut [T], compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in (1..len).rev() {
        if compare(&v[i], &v[i - 1]) == Ordering::Less {
            v.swap(i, i - 1);
        }
    }

    // v[0..2] is ordered by the sentinel pass.
    for i in 2..len {
        let mut j = i;
        while compare(&v[i], &v[j - 1]) == Ordering::Less {
            j -= 1;
        }
        if j < i {
            v[j..=i].rotate_right(1);
        }
    }
}
