use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::algorithm::{Algorithm, AlgorithmKdTree, NearestAlgorithm, Strategy};
use crate::bounds::BoundingBox;
use crate::error::IndexError;
use crate::point::{point_from_slice, points_from_flat, read_points};

/// A static nearest-neighbor index over a point set.
///
/// The index owns the points and one search strategy built from them. Both are
/// fixed at construction; queries only read, so an index can be shared between
/// threads freely.
pub struct NearestNeighborIndex<const D: usize, A: NearestAlgorithm<D>> {
    points: Vec<[f64; D]>,
    algorithm: A,
}

impl<const D: usize, A: NearestAlgorithm<D>> NearestNeighborIndex<D, A> {
    /// Indexes `points` with the given search strategy.
    pub fn new(points: Vec<[f64; D]>, mut algorithm: A) -> Self {
        algorithm.set_points(&points);
        debug!(points = points.len(), dims = D, "built nearest-neighbor index");
        Self { points, algorithm }
    }

    /// Indexes interleaved coordinates `[x0, y0, x1, y1, ...]`.
    pub fn from_flat(coords: &[f64], algorithm: A) -> Result<Self, IndexError> {
        Ok(Self::new(points_from_flat(coords)?, algorithm))
    }

    /// Indexes the points of a text file with one point per line.
    pub fn import_points<P: AsRef<Path>>(path: P, algorithm: A) -> Result<Self, IndexError> {
        Ok(Self::new(read_points(path)?, algorithm))
    }

    /// Returns the indexed point closest to `query`, or `None` if the index is empty.
    ///
    /// When several points are equally close, any one of them may be returned,
    /// but the same index always answers the same query the same way.
    pub fn find_nearest(&self, query: &[f64; D]) -> Option<[f64; D]> {
        self.find_nearest_index(query).map(|i| self.points[i])
    }

    /// Like [`find_nearest`](Self::find_nearest) but returns the position of the
    /// point in [`points`](Self::points).
    pub fn find_nearest_index(&self, query: &[f64; D]) -> Option<usize> {
        self.algorithm.nearest(&self.points, query).map(|(i, _)| i)
    }

    /// Returns the closest point together with its Euclidean distance to `query`.
    pub fn find_nearest_with_distance(&self, query: &[f64; D]) -> Option<([f64; D], f64)> {
        self.algorithm
            .nearest(&self.points, query)
            .map(|(i, dist)| (self.points[i], dist))
    }

    /// Queries with a coordinate slice of unchecked length.
    ///
    /// Fails with [`IndexError::DimensionMismatch`] unless the slice has exactly `D` entries,
    /// and with [`IndexError::NonFinite`] if any of them is NaN or infinite.
    pub fn find_nearest_slice(&self, query: &[f64]) -> Result<Option<[f64; D]>, IndexError> {
        let query = point_from_slice::<D>(query)?;
        Ok(self.find_nearest(&query))
    }

    /// Answers many queries in parallel. The result at position `i` belongs to `queries[i]`.
    pub fn find_nearest_batch(&self, queries: &[[f64; D]]) -> Vec<Option<[f64; D]>> {
        queries.par_iter().map(|q| self.find_nearest(q)).collect()
    }

    /// The indexed points, in the order they were given.
    pub fn points(&self) -> &[[f64; D]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the indexed points, `None` when the index is empty.
    pub fn bounds(&self) -> Option<BoundingBox<D>> {
        BoundingBox::from_points(&self.points)
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }
}

impl<const D: usize> NearestNeighborIndex<D, AlgorithmKdTree<D>> {
    /// Indexes `points` with a k-d tree.
    pub fn build(points: Vec<[f64; D]>) -> Self {
        Self::new(points, AlgorithmKdTree::new())
    }
}

impl<const D: usize> NearestNeighborIndex<D, Algorithm<D>> {
    /// Indexes `points` with the search strategy named by `strategy`.
    pub fn with_strategy(points: Vec<[f64; D]>, strategy: Strategy) -> Self {
        Self::new(points, strategy.algorithm())
    }

    pub fn strategy(&self) -> Strategy {
        self.algorithm.strategy()
    }
}

/// Builds a k-d tree backed index over `points`. An empty input gives an empty index.
///
/// Typed points are not validated. A point whose distance to a query is NaN is never
/// returned, so points with NaN coordinates are effectively invisible. Use
/// [`point_from_slice`](crate::point::point_from_slice) to reject them up front.
pub fn build_index<const D: usize>(points: Vec<[f64; D]>) -> NearestNeighborIndex<D, AlgorithmKdTree<D>> {
    NearestNeighborIndex::build(points)
}

/// Returns the point of `index` closest to `query`, or `None` if the index is empty.
///
/// A query with a NaN coordinate is at a NaN distance from everything and finds `None`.
pub fn find_nearest<const D: usize, A: NearestAlgorithm<D>>(
    index: &NearestNeighborIndex<D, A>,
    query: &[f64; D],
) -> Option<[f64; D]> {
    index.find_nearest(query)
}
