use crate::error::RmqError;
use crate::{
    BruteForce, CartesianTreeLca, DynamicRmq, SegmentTree, SparseTable, SqrtDecomposition,
    StaticRmq, Strategy,
};

#[derive(Clone, Debug)]
enum Backend<'a, T> {
    BruteForce(BruteForce<'a, T>),
    SqrtDecomposition(SqrtDecomposition<T>),
    SegmentTree(SegmentTree<T>),
    SparseTable(SparseTable<'a, T>),
    CartesianTreeLca(CartesianTreeLca<'a, T>),
}

/// A range minimum structure chosen at build time.
///
/// Read-only strategies borrow `keys`; the updatable ones keep a private copy
/// and mirror every [`RmqEngine::update`] into it.
#[derive(Clone, Debug)]
pub struct RmqEngine<'a, T> {
    backend: Backend<'a, T>,
}

macro_rules! dispatch {
    ($self:expr, $rmq:ident => $body:expr) => {
        match $self {
            Backend::BruteForce($rmq) => $body,
            Backend::SqrtDecomposition($rmq) => $body,
            Backend::SegmentTree($rmq) => $body,
            Backend::SparseTable($rmq) => $body,
            Backend::CartesianTreeLca($rmq) => $body,
        }
    };
}

impl<'a, T: Ord + Clone> RmqEngine<'a, T> {
    pub fn build(keys: &'a [T], strategy: Strategy) -> Result<Self, RmqError> {
        let backend = match strategy {
            Strategy::BruteForce => Backend::BruteForce(BruteForce::new(keys)?),
            Strategy::SqrtDecomposition => {
                Backend::SqrtDecomposition(SqrtDecomposition::new(keys)?)
            }
            Strategy::SegmentTree => Backend::SegmentTree(SegmentTree::new(keys)?),
            Strategy::SparseTable => Backend::SparseTable(SparseTable::new(keys)?),
            Strategy::CartesianTreeLca => {
                Backend::CartesianTreeLca(CartesianTreeLca::new(keys)?)
            }
        };
        Ok(Self { backend })
    }
}

impl<T: Ord> RmqEngine<'_, T> {
    pub fn strategy(&self) -> Strategy {
        match &self.backend {
            Backend::BruteForce(_) => Strategy::BruteForce,
            Backend::SqrtDecomposition(_) => Strategy::SqrtDecomposition,
            Backend::SegmentTree(_) => Strategy::SegmentTree,
            Backend::SparseTable(_) => Strategy::SparseTable,
            Backend::CartesianTreeLca(_) => Strategy::CartesianTreeLca,
        }
    }

    /// Minimum key in `[l, r]`.
    pub fn query(&self, l: usize, r: usize) -> Result<&T, RmqError> {
        self.min(l, r)
    }

    /// Replaces the key at `pos`.
    ///
    /// Fails with [`RmqError::Unsupported`] for read-only strategies, whatever
    /// `pos` is.
    pub fn update(&mut self, pos: usize, value: T) -> Result<(), RmqError> {
        let strategy = self.strategy();
        match &mut self.backend {
            Backend::SqrtDecomposition(rmq) => rmq.update(pos, value),
            Backend::SegmentTree(rmq) => rmq.update(pos, value),
            Backend::BruteForce(_) | Backend::SparseTable(_) | Backend::CartesianTreeLca(_) => {
                Err(RmqError::Unsupported { strategy })
            }
        }
    }
}

impl<T: Ord> StaticRmq<T> for RmqEngine<'_, T> {
    fn values(&self) -> &[T] {
        dispatch!(&self.backend, rmq => rmq.values())
    }

    fn argmin(&self, l: usize, r: usize) -> Result<usize, RmqError> {
        dispatch!(&self.backend, rmq => rmq.argmin(l, r))
    }
}
