use crate::{SortError, check_range};

pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    bubble_sort_slice(data);
}

/// Bubble sorts the inclusive range `start..=end`, leaving the rest untouched.
pub fn bubble_sort_range<T: Ord>(
    data: &mut [T],
    start: usize,
    end: usize,
) -> Result<(), SortError> {
    check_range(start, end, data.len())?;
    bubble_sort_slice(&mut data[start..=end]);
    Ok(())
}

// Each pass ripples the smallest remaining element down to position `i`; a
// pass without swaps ends the sort early.
fn bubble_sort_slice<T: Ord>(data: &mut [T]) {
    let last = data.len().saturating_sub(1);
    for i in 0..last {
        let mut swapped = false;
        for j in (i + 1..=last).rev() {
            if data[j - 1] > data[j] {
                data.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
