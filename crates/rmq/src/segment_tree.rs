use log::{debug, trace};

use crate::error::RmqError;
use crate::util::{NONE, better_or_none, check_position, check_range};
use crate::{DynamicRmq, StaticRmq};

/// Iterative bottom-up segment tree over argmin indices.
///
/// Node `i` has children `2i` and `2i + 1`; leaves live at `size..2 * size`.
/// Padding leaves hold `NONE`, which never wins a comparison.
#[derive(Clone, Debug)]
pub struct SegmentTree<T> {
    values: Vec<T>,
    size: usize,
    tree: Vec<usize>,
}

impl<T: Ord + Clone> SegmentTree<T> {
    pub fn new(values: &[T]) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::EmptyInput);
        }

        let n = values.len();
        let values = values.to_vec();
        let size = n.next_power_of_two();
        let mut tree = vec![NONE; 2 * size];
        for i in 0..n {
            tree[size + i] = i;
        }
        for i in (1..size).rev() {
            tree[i] = better_or_none(&values, tree[2 * i], tree[2 * i + 1]);
        }

        debug!("built segment tree: n={n}, size={size}");
        Ok(Self { values, size, tree })
    }
}

impl<T> SegmentTree<T> {
    /// Number of leaves, `n` rounded up to a power of two.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<T: Ord> StaticRmq<T> for SegmentTree<T> {
    fn values(&self) -> &[T] {
        &self.values
    }

    fn argmin(&self, l: usize, r: usize) -> Result<usize, RmqError> {
        check_range(self.values.len(), l, r)?;

        let values = &self.values;
        let tree = &self.tree;
        let mut l = l + self.size;
        let mut r = r + self.size;
        let mut ans = NONE;

        while l <= r {
            if (l & 1) == 1 {
                ans = better_or_none(values, ans, tree[l]);
                l += 1;
            }
            if (r & 1) == 0 {
                ans = better_or_none(values, ans, tree[r]);
                r -= 1;
            }
            l >>= 1;
            r >>= 1;
        }

        debug_assert_ne!(ans, NONE);
        Ok(ans)
    }
}

impl<T: Ord> DynamicRmq<T> for SegmentTree<T> {
    fn update(&mut self, pos: usize, value: T) -> Result<(), RmqError> {
        check_position(self.values.len(), pos)?;
        self.values[pos] = value;

        let mut i = (pos + self.size) >> 1;
        while i >= 1 {
            self.tree[i] = better_or_none(&self.values, self.tree[2 * i], self.tree[2 * i + 1]);
            i >>= 1;
        }
        trace!("segment tree: updated position {pos}");
        Ok(())
    }
}
