use crate::RmqError;

/// Sentinel index that loses every comparison.
pub(crate) const NONE: usize = usize::MAX;

/// Index of the smaller key, preferring the smaller index on ties.
#[inline(always)]
pub(crate) fn better_index<T: Ord>(values: &[T], a: usize, b: usize) -> usize {
    let va = &values[a];
    let vb = &values[b];
    if va < vb || (va == vb && a < b) { a } else { b }
}

#[inline(always)]
pub(crate) fn better_index_ordered<T: Ord>(values: &[T], a: usize, b: usize) -> usize {
    debug_assert!(a < b);
    if values[a] <= values[b] { a } else { b }
}

#[inline(always)]
pub(crate) fn better_or_none<T: Ord>(values: &[T], a: usize, b: usize) -> usize {
    if a == NONE {
        return b;
    }
    if b == NONE {
        return a;
    }
    better_index(values, a, b)
}

/// Leftmost minimum of `values[start..end]`, as an absolute index.
pub(crate) fn scan_argmin<T: Ord>(values: &[T], start: usize, end: usize) -> usize {
    debug_assert!(start < end);
    let mut best = start;
    for i in (start + 1)..end {
        if values[i] < values[best] {
            best = i;
        }
    }
    best
}

#[inline]
pub(crate) fn check_range(len: usize, l: usize, r: usize) -> Result<(), RmqError> {
    if l > r || r >= len {
        return Err(RmqError::InvalidRange { l, r, len });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_position(len: usize, pos: usize) -> Result<(), RmqError> {
    if pos >= len {
        return Err(RmqError::PositionOutOfBounds { pos, len });
    }
    Ok(())
}
