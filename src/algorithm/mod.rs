use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;

pub mod kdtree;
pub mod linear;

pub use kdtree::AlgorithmKdTree;
pub use linear::AlgorithmLinear;

/// Trait defining a nearest-neighbor search strategy.
/// This allows swapping between the k-d tree and the linear scan baseline.
pub trait NearestAlgorithm<const D: usize>: Send + Sync {
    /// Rebuild the search structure for a new point set.
    fn set_points(&mut self, points: &[[f64; D]]);

    /// Find the point closest to `query`.
    ///
    /// # Arguments
    /// * `points` - The same points last passed to `set_points`; results refer to them by index.
    /// * `query` - The query position.
    ///
    /// Returns the index of a closest point together with its Euclidean distance,
    /// or `None` if there are no points. Points at a NaN distance from the query
    /// are never returned, so a query with a NaN coordinate finds nothing.
    ///
    /// Implementations must not panic when `points` differs from what was last passed to
    /// `set_points`; the tree answers `None` if the lengths differ.
    fn nearest(&self, points: &[[f64; D]], query: &[f64; D]) -> Option<(usize, f64)>;
}

/// Names the available search strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Median-split k-d tree with pruned depth-first search.
    #[default]
    KdTree,
    /// Brute-force scan over every point.
    Linear,
}

impl Strategy {
    /// Creates an empty search structure of this kind.
    pub fn algorithm<const D: usize>(self) -> Algorithm<D> {
        match self {
            Strategy::KdTree => Algorithm::KdTree(AlgorithmKdTree::new()),
            Strategy::Linear => Algorithm::Linear(AlgorithmLinear),
        }
    }
}

impl FromStr for Strategy {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kdtree" | "kd-tree" | "tree" | "fast" => Ok(Strategy::KdTree),
            "linear" | "slow" => Ok(Strategy::Linear),
            _ => Err(IndexError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::KdTree => write!(f, "kdtree"),
            Strategy::Linear => write!(f, "linear"),
        }
    }
}

/// Either search strategy, chosen when the index is composed.
pub enum Algorithm<const D: usize> {
    KdTree(AlgorithmKdTree<D>),
    Linear(AlgorithmLinear),
}

impl<const D: usize> Algorithm<D> {
    pub fn strategy(&self) -> Strategy {
        match self {
            Algorithm::KdTree(_) => Strategy::KdTree,
            Algorithm::Linear(_) => Strategy::Linear,
        }
    }
}

impl<const D: usize> NearestAlgorithm<D> for Algorithm<D> {
    fn set_points(&mut self, points: &[[f64; D]]) {
        match self {
            Algorithm::KdTree(tree) => tree.set_points(points),
            Algorithm::Linear(linear) => linear.set_points(points),
        }
    }

    fn nearest(&self, points: &[[f64; D]], query: &[f64; D]) -> Option<(usize, f64)> {
        match self {
            Algorithm::KdTree(tree) => tree.nearest(points, query),
            Algorithm::Linear(linear) => linear.nearest(points, query),
        }
    }
}
