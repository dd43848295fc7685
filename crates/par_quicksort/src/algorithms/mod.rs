pub mod bubble_sort;
pub mod insertion_sort;
pub mod partition;
pub mod pivot;
pub mod quick_sort_parallel;
