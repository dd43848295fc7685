use crate::SortError;

/// Checks an inclusive `start..=end` range against a sequence of length `len`.
///
/// `start > end` is reported before the bounds check.
#[inline]
pub fn check_range(start: usize, end: usize, len: usize) -> Result<(), SortError> {
    if start > end {
        return Err(SortError::InvalidRange { start, end });
    }
    if end >= len {
        return Err(SortError::IndexOutOfBounds { index: end, len });
    }
    Ok(())
}
