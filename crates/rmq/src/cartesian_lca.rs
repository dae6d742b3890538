use log::debug;

use crate::StaticRmq;
use crate::cartesian_tree::CartesianTree;
use crate::error::RmqError;
use crate::euler_tour::EulerTour;
use crate::sparse_table::IndexSparseTable;
use crate::util::{check_position, check_range};

/// RMQ reduced to LCA on the Cartesian tree of the keys.
///
/// The minimum of `[l, r]` sits at the lowest common ancestor of nodes `l`
/// and `r`. That ancestor is the shallowest node of the Euler tour between the
/// first occurrences of `l` and `r`, found with a sparse table over the tour
/// depths.
#[derive(Clone, Debug)]
pub struct CartesianTreeLca<'a, T> {
    values: &'a [T],
    tree: CartesianTree,
    tour: EulerTour,
    depth_table: IndexSparseTable,
}

impl<'a, T: Ord> CartesianTreeLca<'a, T> {
    pub fn new(values: &'a [T]) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::EmptyInput);
        }

        let tree = CartesianTree::new(values);
        let tour = EulerTour::new(&tree);
        let depth_table = IndexSparseTable::new(tour.depths());

        debug!(
            "built cartesian tree lca: n={}, root={}, tour_len={}, levels={}",
            values.len(),
            tree.root(),
            tour.len(),
            depth_table.levels()
        );
        Ok(Self {
            values,
            tree,
            tour,
            depth_table,
        })
    }
}

impl<T> CartesianTreeLca<'_, T> {
    pub fn tree(&self) -> &CartesianTree {
        &self.tree
    }

    pub fn tour(&self) -> &EulerTour {
        &self.tour
    }

    /// Lowest common ancestor of nodes `u` and `v` in the Cartesian tree.
    pub fn lca(&self, u: usize, v: usize) -> Result<usize, RmqError> {
        check_position(self.tree.len(), u)?;
        check_position(self.tree.len(), v)?;
        Ok(self.lca_assume_valid(u, v))
    }

    fn lca_assume_valid(&self, u: usize, v: usize) -> usize {
        let (a, b) = (self.tour.first_occurrence(u), self.tour.first_occurrence(v));
        let (l, r) = if a <= b { (a, b) } else { (b, a) };
        let idx = self
            .depth_table
            .argmin_assume_valid(self.tour.depths(), l, r);
        self.tour.nodes()[idx]
    }
}

impl<T: Ord> StaticRmq<T> for CartesianTreeLca<'_, T> {
    fn values(&self) -> &[T] {
        self.values
    }

    fn argmin(&self, l: usize, r: usize) -> Result<usize, RmqError> {
        check_range(self.values.len(), l, r)?;
        Ok(self.lca_assume_valid(l, r))
    }
}
