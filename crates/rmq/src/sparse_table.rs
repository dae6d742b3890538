use std::ops::Range;

use log::debug;

use crate::StaticRmq;
use crate::error::RmqError;
use crate::util::{better_index, better_index_ordered, check_range};

/// Doubling table of argmin indices.
///
/// Row `k` holds, for every `i`, the argmin of the window `[i, i + 2^k)`.
/// The table stores indices only; the key slice is passed in on every call,
/// so the same table type serves plain arrays and Euler-tour depths.
#[derive(Clone, Debug)]
pub(crate) struct IndexSparseTable {
    n: usize,
    log2: Vec<u8>,
    row_offsets: Vec<usize>,
    table: Vec<usize>,
}

impl IndexSparseTable {
    pub(crate) fn new<T: Ord>(values: &[T]) -> Self {
        let n = values.len();
        debug_assert!(n > 0);

        let mut log2 = vec![0_u8; n + 1];
        for i in 2..=n {
            log2[i] = log2[i / 2] + 1;
        }

        let levels = log2[n] as usize + 1;
        let total_len: usize = (0..levels).map(|k| n + 1 - (1_usize << k)).sum();

        let mut row_offsets = Vec::with_capacity(levels);
        let mut table = Vec::with_capacity(total_len);

        row_offsets.push(0);
        table.extend(0..n);

        for k in 1..levels {
            let span = 1_usize << k;
            let half = span >> 1;
            let len = n + 1 - span;

            let prev = row_offsets[k - 1];
            row_offsets.push(table.len());
            for i in 0..len {
                let a = table[prev + i];
                let b = table[prev + i + half];
                table.push(better_index_ordered(values, a, b));
            }
        }
        debug_assert_eq!(table.len(), total_len);

        Self {
            n,
            log2,
            row_offsets,
            table,
        }
    }

    pub(crate) fn levels(&self) -> usize {
        self.row_offsets.len()
    }

    /// Start offsets of the two power-of-two windows covering `[l, r]`.
    #[inline(always)]
    fn window_starts(&self, l: usize, r: usize) -> (usize, usize, usize) {
        debug_assert!(l <= r && r < self.n);
        let k = self.log2[r - l + 1] as usize;
        (k, l, r + 1 - (1_usize << k))
    }

    #[inline(always)]
    pub(crate) fn argmin_assume_valid<T: Ord>(&self, values: &[T], l: usize, r: usize) -> usize {
        let (k, a, b) = self.window_starts(l, r);
        let base = self.row_offsets[k];
        better_index(values, self.table[base + a], self.table[base + b])
    }
}

/// O(n log n) preprocessing, O(1) query, no updates.
#[derive(Clone, Debug)]
pub struct SparseTable<'a, T> {
    values: &'a [T],
    table: IndexSparseTable,
}

impl<'a, T: Ord> SparseTable<'a, T> {
    pub fn new(values: &'a [T]) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::EmptyInput);
        }
        let table = IndexSparseTable::new(values);
        debug!(
            "built sparse table: n={}, levels={}",
            values.len(),
            table.levels()
        );
        Ok(Self { values, table })
    }

    /// Number of rows, `floor(log2(n)) + 1`.
    pub fn level_count(&self) -> usize {
        self.table.levels()
    }

    /// The two overlapping windows consulted for `[l, r]`.
    pub fn windows(&self, l: usize, r: usize) -> Result<[Range<usize>; 2], RmqError> {
        check_range(self.values.len(), l, r)?;
        let (k, a, b) = self.table.window_starts(l, r);
        let span = 1_usize << k;
        Ok([a..a + span, b..b + span])
    }
}

impl<T: Ord> StaticRmq<T> for SparseTable<'_, T> {
    fn values(&self) -> &[T] {
        self.values
    }

    fn argmin(&self, l: usize, r: usize) -> Result<usize, RmqError> {
        check_range(self.values.len(), l, r)?;
        Ok(self.table.argmin_assume_valid(self.values, l, r))
    }
}
