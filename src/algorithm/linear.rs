use crate::algorithm::NearestAlgorithm;
use crate::point::distance;

/// Brute-force nearest-neighbor search.
///
/// Holds no state: every query scans all points. Serves as the reference the
/// k-d tree is checked and benchmarked against.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlgorithmLinear;

impl<const D: usize> NearestAlgorithm<D> for AlgorithmLinear {
    fn set_points(&mut self, _points: &[[f64; D]]) {}

    fn nearest(&self, points: &[[f64; D]], query: &[f64; D]) -> Option<(usize, f64)> {
        let mut best = None;
        let mut best_dist = f64::INFINITY;
        for (i, p) in points.iter().enumerate() {
            let dist = distance(query, p);
            if dist < best_dist || (best.is_none() && !dist.is_nan()) {
                best = Some(i);
                best_dist = dist;
            }
        }
        best.map(|i| (i, best_dist))
    }
}

/// Returns the point of `points` closest to `query` by a linear scan, or
/// `None` if `points` is empty. The first of several equidistant points wins.
pub fn find_nearest_linear<const D: usize>(query: &[f64; D], points: &[[f64; D]]) -> Option<[f64; D]> {
    AlgorithmLinear.nearest(points, query).map(|(i, _)| points[i])
}
