use std::fmt;
use std::str::FromStr;

use crate::RmqError;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    BruteForce,
    SqrtDecomposition,
    SegmentTree,
    #[default]
    SparseTable,
    CartesianTreeLca,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BruteForce,
        Strategy::SqrtDecomposition,
        Strategy::SegmentTree,
        Strategy::SparseTable,
        Strategy::CartesianTreeLca,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::SqrtDecomposition => "sqrt-decomposition",
            Self::SegmentTree => "segment-tree",
            Self::SparseTable => "sparse-table",
            Self::CartesianTreeLca => "cartesian-tree-lca",
        }
    }

    /// Whether engines built with this strategy accept point updates.
    pub fn supports_update(self) -> bool {
        matches!(self, Self::SqrtDecomposition | Self::SegmentTree)
    }
}

pub fn all_strategies() -> &'static [Strategy] {
    &Strategy::ALL
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = RmqError;

    /// Accepts the names produced by [`Strategy::name`], ignoring ASCII case
    /// and treating `_` as `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| RmqError::UnknownStrategy(s.to_string()))
    }
}
