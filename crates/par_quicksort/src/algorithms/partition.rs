use std::cmp::Ordering;

/// Bentley-McIlroy 3-way partition around the pivot stored at `v[0]`.
///
/// Returns `(lt, gt)` with `v[..lt] < pivot`, `v[lt..gt] == pivot` and
/// `v[gt..] > pivot`. The equal band always contains the pivot itself, so
/// `lt < gt`.
pub fn partition_3way<T, F>(v: &mut [T], compare: &F) -> (usize, usize)
where
    F: Fn(&T, &T) -> Ordering,
{
    debug_assert!(v.len() >= 2);

    let hi = v.len() - 1;
    let mut i = 0usize;
    let mut j = hi + 1;
    // v[1..=p] and v[q..=hi] collect keys equal to the pivot.
    let mut p = 0usize;
    let mut q = hi + 1;

    loop {
        loop {
            i += 1;
            if compare(&v[i], &v[0]) != Ordering::Less || i == hi {
                break;
            }
        }
        loop {
            j -= 1;
            if compare(&v[0], &v[j]) != Ordering::Less || j == 0 {
                break;
            }
        }

        if i == j && compare(&v[i], &v[0]) == Ordering::Equal {
            p += 1;
            v.swap(p, i);
        }
        if i >= j {
            break;
        }

        v.swap(i, j);
        if compare(&v[i], &v[0]) == Ordering::Equal {
            p += 1;
            v.swap(p, i);
        }
        if compare(&v[j], &v[0]) == Ordering::Equal {
            q -= 1;
            v.swap(q, j);
        }
    }

    // Here v[p+1..=j] < pivot and v[j+1..q] > pivot. Move both equal bands
    // (the pivot at 0 included) next to j.
    debug_assert!(p <= j);
    for k in 0..=p {
        v.swap(k, j - k);
    }
    let mut dst = j + 1;
    for k in (q..=hi).rev() {
        v.swap(k, dst);
        dst += 1;
    }

    (j - p, j + 1 + (hi + 1 - q))
}
