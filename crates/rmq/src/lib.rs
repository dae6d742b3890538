mod brute_force;
mod cartesian_lca;
mod cartesian_tree;
mod engine;
mod error;
mod euler_tour;
mod segment_tree;
mod sparse_table;
mod sqrt_decomposition;
mod strategy;
mod util;

pub use brute_force::BruteForce;
pub use cartesian_lca::CartesianTreeLca;
pub use cartesian_tree::CartesianTree;
pub use engine::RmqEngine;
pub use error::RmqError;
pub use euler_tour::EulerTour;
pub use segment_tree::SegmentTree;
pub use sparse_table::SparseTable;
pub use sqrt_decomposition::SqrtDecomposition;
pub use strategy::{Strategy, all_strategies};

/// RMQ (Range Minimum Query) interface.
///
/// - Query ranges are inclusive: `[l, r]` with `l <= r < len()`.
/// - `argmin` reports the smallest index holding the minimum.
/// - Invalid ranges fail with [`RmqError::InvalidRange`] without touching
///   any table.
pub trait StaticRmq<T: Ord> {
    fn values(&self) -> &[T];
    fn argmin(&self, l: usize, r: usize) -> Result<usize, RmqError>;

    fn len(&self) -> usize {
        self.values().len()
    }

    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    fn min(&self, l: usize, r: usize) -> Result<&T, RmqError> {
        let i = self.argmin(l, r)?;
        Ok(&self.values()[i])
    }
}

/// RMQ with point updates. Every cached minimum is consistent again by the
/// time `update` returns.
pub trait DynamicRmq<T: Ord>: StaticRmq<T> {
    fn update(&mut self, pos: usize, value: T) -> Result<(), RmqError>;
}
