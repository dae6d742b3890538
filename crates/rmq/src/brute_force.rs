use log::debug;

use crate::StaticRmq;
use crate::error::RmqError;
use crate::util::{check_range, scan_argmin};

/// Linear scan per query, no preprocessing.
#[derive(Clone, Copy, Debug)]
pub struct BruteForce<'a, T> {
    values: &'a [T],
}

impl<'a, T: Ord> BruteForce<'a, T> {
    pub fn new(values: &'a [T]) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::EmptyInput);
        }
        debug!("built brute-force rmq: n={}", values.len());
        Ok(Self { values })
    }
}

impl<T: Ord> StaticRmq<T> for BruteForce<'_, T> {
    fn values(&self) -> &[T] {
        self.values
    }

    fn argmin(&self, l: usize, r: usize) -> Result<usize, RmqError> {
        check_range(self.values.len(), l, r)?;
        Ok(scan_argmin(self.values, l, r + 1))
    }
}
