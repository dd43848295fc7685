use std::cmp::Ordering;

use crate::TUNED_PARAMS;

use super::{insertion_sort, partition, pivot};

/// One recursive unit of the parallel quicksort.
///
/// A task exclusively borrows its sub-slice; the two children of a task are
/// obtained with `split_at_mut`, so sibling tasks can never overlap.
pub struct SortTask<'a, T, F> {
    data: &'a mut [T],
    compare: &'a F,
}

impl<'a, T, F> SortTask<'a, T, F>
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    #[inline]
    pub fn new(data: &'a mut [T], compare: &'a F) -> Self {
        Self { data, compare }
    }

    /// Sorts the task's slice in place, forking the lower band onto the
    /// current worker pool.
    ///
    /// Must be called from inside a rayon pool to run in parallel; outside of
    /// one, rayon's global pool picks up the forked halves.
    pub fn compute(self) {
        let Self { data, compare } = self;
        let len = data.len();

        if len <= 1 {
            return;
        }
        if len <= TUNED_PARAMS.insertion_threshold {
            insertion_sort::insertion_sort_sentinel(data, compare);
            return;
        }

        let pivot = pivot::choose_pivot(data, compare);
        data.swap(0, pivot);
        let (lt, gt) = partition::partition_3way(data, compare);

        let (less, rest) = data.split_at_mut(lt);
        let (_, greater) = rest.split_at_mut(gt - lt);

        let less = SortTask::new(less, compare);
        let greater = SortTask::new(greater, compare);

        // rayon runs the first closure inline and leaves the second on the
        // local deque for idle workers to steal; join returns once both ran.
        rayon::join(move || greater.compute(), move || less.compute());
    }
}
