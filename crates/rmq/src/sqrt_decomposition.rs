use log::{debug, trace};

use crate::error::RmqError;
use crate::util::{better_index, check_position, check_range, scan_argmin};
use crate::{DynamicRmq, StaticRmq};

/// Fixed-size blocks with a cached argmin per block.
///
/// Queries scan at most two partial blocks plus the cached minima of the
/// blocks fully covered in between. An update rescans the single block that
/// holds the changed position.
#[derive(Clone, Debug)]
pub struct SqrtDecomposition<T> {
    values: Vec<T>,
    block_size: usize,
    block_mins: Vec<usize>,
}

impl<T: Ord + Clone> SqrtDecomposition<T> {
    pub fn new(values: &[T]) -> Result<Self, RmqError> {
        Self::with_block_size(values, Self::default_block_size(values.len()))
    }

    pub fn with_block_size(values: &[T], block_size: usize) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::EmptyInput);
        }
        if block_size == 0 {
            return Err(RmqError::InvalidBlockSize);
        }

        let n = values.len();
        let values = values.to_vec();
        let block_mins: Vec<usize> = (0..n)
            .step_by(block_size)
            .map(|start| scan_argmin(&values, start, (start + block_size).min(n)))
            .collect();

        debug!(
            "built sqrt decomposition: n={n}, block_size={block_size}, blocks={}",
            block_mins.len()
        );
        Ok(Self {
            values,
            block_size,
            block_mins,
        })
    }
}

impl<T> SqrtDecomposition<T> {
    /// `ceil(sqrt(n))`, at least 1.
    fn default_block_size(n: usize) -> usize {
        let s = n.isqrt();
        let s = if s * s < n { s + 1 } else { s };
        s.max(1)
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn block_count(&self) -> usize {
        self.block_mins.len()
    }

    fn block_bounds(&self, block: usize) -> (usize, usize) {
        let start = block * self.block_size;
        (start, (start + self.block_size).min(self.values.len()))
    }
}

impl<T: Ord> StaticRmq<T> for SqrtDecomposition<T> {
    fn values(&self) -> &[T] {
        &self.values
    }

    fn argmin(&self, l: usize, r: usize) -> Result<usize, RmqError> {
        check_range(self.values.len(), l, r)?;

        let bl = l / self.block_size;
        let br = r / self.block_size;
        if bl == br {
            return Ok(scan_argmin(&self.values, l, r + 1));
        }

        let (_, left_end) = self.block_bounds(bl);
        let (right_start, _) = self.block_bounds(br);
        let mut ans = scan_argmin(&self.values, l, left_end);
        for &mid in &self.block_mins[(bl + 1)..br] {
            ans = better_index(&self.values, ans, mid);
        }
        let right = scan_argmin(&self.values, right_start, r + 1);
        Ok(better_index(&self.values, ans, right))
    }
}

impl<T: Ord> DynamicRmq<T> for SqrtDecomposition<T> {
    fn update(&mut self, pos: usize, value: T) -> Result<(), RmqError> {
        check_position(self.values.len(), pos)?;
        self.values[pos] = value;

        let block = pos / self.block_size;
        let (start, end) = self.block_bounds(block);
        self.block_mins[block] = scan_argmin(&self.values, start, end);
        trace!("sqrt decomposition: updated position {pos}, rescanned block {block}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqrtDecomposition;
    use crate::util::scan_argmin;
    use crate::{DynamicRmq, RmqError, StaticRmq};

    fn assert_block_cache_consistent(rmq: &SqrtDecomposition<i64>) {
        let n = rmq.values.len();
        for (block, &cached) in rmq.block_mins.iter().enumerate() {
            let start = block * rmq.block_size;
            let end = (start + rmq.block_size).min(n);
            assert_eq!(cached, scan_argmin(&rmq.values, start, end), "block {block}");
        }
    }

    #[test]
    fn default_block_size_is_ceil_sqrt() {
        let cases = [(1, 1), (2, 2), (4, 2), (5, 3), (8, 3), (9, 3), (10, 4), (100, 10)];
        for (n, expected) in cases {
            let values = vec![0_i64; n];
            let rmq = SqrtDecomposition::new(&values).unwrap();
            assert_eq!(rmq.block_size(), expected, "n={n}");
            assert_eq!(rmq.block_count(), n.div_ceil(expected), "n={n}");
        }
    }

    #[test]
    fn update_rescans_block() {
        let values = vec![5, 2, 8, 1, 9, 3, 7, 4];
        let mut rmq = SqrtDecomposition::new(&values).unwrap();
        assert_eq!(rmq.min(1, 4), Ok(&1));
        rmq.update(3, 10).unwrap();
        assert_block_cache_consistent(&rmq);
        assert_eq!(rmq.min(1, 4), Ok(&2));
        assert_eq!(rmq.min(3, 3), Ok(&10));
        assert_eq!(rmq.min(0, 7), Ok(&2));
    }

    #[test]
    fn custom_block_size_spans_many_blocks() {
        let values: Vec<i64> = vec![9, 4, 7, 3, 8, 6, 2, 5, 1, 0, 11];
        let rmq = SqrtDecomposition::with_block_size(&values, 2).unwrap();
        assert_eq!(rmq.block_count(), 6);
        assert_eq!(rmq.argmin(1, 7), Ok(6));
        assert_eq!(rmq.argmin(0, 10), Ok(9));
        assert_eq!(rmq.argmin(10, 10), Ok(10));
    }

    #[test]
    fn rejected_calls_leave_state_unchanged() {
        let values = vec![3_i64, 1, 2];
        let mut rmq = SqrtDecomposition::new(&values).unwrap();
        assert_eq!(
            rmq.update(3, -1),
            Err(RmqError::PositionOutOfBounds { pos: 3, len: 3 })
        );
        assert_eq!(rmq.values(), &[3, 1, 2]);
        assert_block_cache_consistent(&rmq);
        assert_eq!(
            SqrtDecomposition::with_block_size(&values, 0).unwrap_err(),
            RmqError::InvalidBlockSize
        );
    }
}
